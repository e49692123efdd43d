use leptos::prelude::*;

use crate::content::HIGHLIGHTS;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="section" id="about" aria-label="About me">
            <h2 class="section__title reveal">"About " <span>"Me"</span></h2>
            <div class="about__content">
                <div class="about__text reveal">
                    <p>
                        "Graphics engineer specializing in real-time rendering, systems-level networking, and full-stack web development. Currently finishing my CS degree at San Diego State University."
                    </p>
                    <p>
                        "I started with React apps for behavioral change and meaningful conversation, then dove into systems programming: building multiplayer TCP servers with concurrent I/O, and recently into real-time graphics with OpenGL shader development, GPU instancing, and writing a ray tracer from scratch."
                    </p>
                    <p>
                        "I'm driven by understanding how things work under the hood, whether that's light transport through a scene, packet flow through a socket, or state management across a networked game."
                    </p>
                    <p class="about__currently">
                        <strong>"Currently exploring:"</strong>
                        " PBR materials, shadow mapping techniques, and cross-network multiplayer via WebRTC."
                    </p>
                </div>
                <div class="about__highlights reveal-stagger">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="about__highlight-card">
                                    <span class="about__highlight-number">{h.number}</span>
                                    <span class="about__highlight-label">{h.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
