//! Everything the page says. Components render these arrays as-is.

pub const SITE_OWNER: &str = "Lucas Weinstein";
pub const SITE_LOGO: &str = "lucas.";
pub const CONTACT_EMAIL: &str = "lucasbwein@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/lucasbwein";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/lucasweinstein";
pub const RESUME_FILE: &str = "resume.pdf";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Page sections in document order. Each one is rendered with this `id`.
pub const SECTION_IDS: [&str; 5] = ["hero", "about", "projects", "skills", "contact"];
pub const HERO_ID: &str = SECTION_IDS[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        id: "about",
        label: "About",
    },
    NavLink {
        id: "projects",
        label: "Projects",
    },
    NavLink {
        id: "skills",
        label: "Skills",
    },
    NavLink {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<ExternalLink>,
    /// File under `public/`, resolved with [`crate::config::SiteConfig::asset_url`].
    pub image: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    pub fn card_class(&self) -> String {
        let mut class = format!("project-card project-card--{}", self.id);
        if self.featured {
            class.push_str(" project-card--featured");
        }
        if self.image.is_some() {
            class.push_str(" project-card--has-image");
        }
        class
    }
}

pub const PROJECTS: [Project; 5] = [
    Project {
        id: "raytrace",
        title: "CPU Ray Tracer",
        description: "Physically-based ray tracer built from scratch. Implements recursive reflection and refraction, Phong shading, soft shadows, and accurate light transport across diffuse, specular, and transparent surfaces. All ray-scene intersection math written by hand, no rendering libraries.",
        tech: &["C++", "OpenGL", "Linear Algebra"],
        link: Some(ExternalLink {
            href: "https://github.com/lucasbwein/CPU-Ray-Tracing",
            label: "View on GitHub",
        }),
        image: Some("demo-raytrace.jpg"),
        badge: None,
        featured: true,
    },
    Project {
        id: "tcg",
        title: "ORIGIN: Battle of the Ancients",
        description: "Strategic trading card game with 100+ unique cards, elemental creature evolution, and deep deck-building mechanics. Built a custom card rendering pipeline with shader-driven VFX, a full ability system routing 87 unique effects, AI opponents, and LAN multiplayer with host-authoritative state sync.",
        tech: &["GDScript", "Godot 4.3", "GLSL Shaders", "ENet Networking"],
        link: None,
        image: Some("demo-tcg.jpg"),
        badge: Some("In Development"),
        featured: true,
    },
    Project {
        id: "shell",
        title: "Shell Texturing Fur Rendering",
        description: "Real-time fur rendering in OpenGL using the shell texturing technique. Generates volumetric fur with GPU-instanced shell layers, Perlin noise density functions for strand distribution, and per-fragment lighting for realistic shading at interactive frame rates.",
        tech: &["C++", "GLSL", "OpenGL", "GPU Instancing"],
        link: Some(ExternalLink {
            href: "https://github.com/lucasbwein/OpenGL-Shell-Texturing",
            label: "View on GitHub",
        }),
        image: Some("demo-shell.jpg"),
        badge: None,
        featured: false,
    },
    Project {
        id: "urge",
        title: "Replace the Urge",
        description: "Behavioral change app that helps redirect unproductive urges into intentional actions. Tracks user patterns over time, surfaces personalized alternatives, and includes iOS Shortcuts integration for social media intention-setting.",
        tech: &["React", "LocalStorage", "iOS Shortcuts"],
        link: Some(ExternalLink {
            href: "https://urge-replacer.vercel.app",
            label: "Live Demo",
        }),
        image: Some("demo-urge.jpg"),
        badge: None,
        featured: false,
    },
    Project {
        id: "rps",
        title: "Multiplayer Game Server",
        description: "Concurrent TCP game server handling multiple simultaneous matches with I/O multiplexing via select(). Implements matchmaking, game state machines, graceful disconnect recovery, and protocol-level message framing, all without threading.",
        tech: &["C++", "TCP Sockets", "select()", "State Machines"],
        link: Some(ExternalLink {
            href: "https://github.com/lucasbwein/Rock-Paper-Scissors-Game",
            label: "View on GitHub",
        }),
        image: None,
        badge: None,
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        icon: "\u{1F4BB}",
        title: "Languages",
        tags: &["C++", "JavaScript", "Python", "Java", "GLSL", "GDScript"],
    },
    SkillGroup {
        icon: "\u{1F4A0}",
        title: "Graphics & Rendering",
        tags: &["OpenGL", "Shader Programming", "GPU Instancing", "Ray Tracing"],
    },
    SkillGroup {
        icon: "\u{1F3AE}",
        title: "Game Dev & Tools",
        tags: &["Godot 4", "GDScript", "Custom UI Systems", "LAN Multiplayer"],
    },
    SkillGroup {
        icon: "\u{2699}\u{FE0F}",
        title: "Backend & Systems",
        tags: &["Node.js", "MongoDB", "TCP/UDP Sockets", "REST APIs"],
    },
    SkillGroup {
        icon: "\u{1F3A8}",
        title: "Frontend",
        tags: &["React", "HTML/CSS", "Responsive Design", "UI/UX"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        number: "5+",
        label: "Projects Built",
    },
    Highlight {
        number: "6",
        label: "Languages",
    },
    Highlight {
        number: "3",
        label: "Focus Areas",
    },
    Highlight {
        number: "Sony",
        label: "Internship",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Url(&'static str),
    Mail(&'static str),
    /// File under `public/`.
    Asset(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub target: ContactTarget,
}

impl ContactLink {
    /// Mail links open in place; everything else opens a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self.target, ContactTarget::Mail(_))
    }

    pub fn href(&self) -> String {
        match self.target {
            ContactTarget::Url(url) => url.to_string(),
            ContactTarget::Mail(address) => format!("mailto:{address}"),
            ContactTarget::Asset(file) => crate::config::SITE.asset_url(file),
        }
    }
}

pub const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        label: "Email",
        target: ContactTarget::Mail(CONTACT_EMAIL),
    },
    ContactLink {
        label: "LinkedIn",
        target: ContactTarget::Url(LINKEDIN_URL),
    },
    ContactLink {
        label: "GitHub",
        target: ContactTarget::Url(GITHUB_URL),
    },
    ContactLink {
        label: "Resume",
        target: ContactTarget::Asset(RESUME_FILE),
    },
];

pub const FOOTER_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        href: GITHUB_URL,
        label: "GitHub",
    },
    ExternalLink {
        href: LINKEDIN_URL,
        label: "LinkedIn",
    },
];

pub fn copyright(year: i32) -> String {
    format!("\u{a9} {year} {SITE_OWNER}")
}
