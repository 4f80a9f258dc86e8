//! Static copy and link data for the page owner.

pub const OWNER: &str = "ASHERY";
pub const ROLE: &str = "Frontend Developer";
pub const EMAIL: &str = "ashery@satatechnologies.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/ashery-dev";
pub const GITHUB_URL: &str = "https://github.com/ashery-dev";
pub const TAGLINE: &str = "Frontend Developer • 3+ Years Experience • BSc Software Engineering Student";

/// Year the site was built, stamped by `build.rs`.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub color: &'static str,
}

pub const SKILLS: [Skill; 8] = [
    Skill {
        name: "React",
        level: 95,
        color: "#61dafb",
    },
    Skill {
        name: "TypeScript",
        level: 90,
        color: "#3178c6",
    },
    Skill {
        name: "JavaScript",
        level: 95,
        color: "#f7df1e",
    },
    Skill {
        name: "Next.js",
        level: 88,
        color: "#000000",
    },
    Skill {
        name: "Tailwind CSS",
        level: 92,
        color: "#06b6d4",
    },
    Skill {
        name: "Node.js",
        level: 85,
        color: "#339933",
    },
    Skill {
        name: "Vue.js",
        level: 80,
        color: "#4fc08d",
    },
    Skill {
        name: "GSAP",
        level: 75,
        color: "#88ce02",
    },
];

pub const CORE_TECH: [&str; 5] = ["React", "TypeScript", "Next.js", "Tailwind", "Three.js"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "3+",
        label: "Years Experience",
    },
    Stat {
        value: "50+",
        label: "Projects Completed",
    },
    Stat {
        value: "SATA",
        label: "Technologies",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        icon: "📧",
        label: "Email",
        value: EMAIL,
        href: "mailto:ashery@satatechnologies.com",
        color: "#06b6d4",
    },
    ContactLink {
        icon: "💼",
        label: "LinkedIn",
        value: "/in/ashery-dev",
        href: LINKEDIN_URL,
        color: "#8b5cf6",
    },
    ContactLink {
        icon: "🐙",
        label: "GitHub",
        value: "/ashery-dev",
        href: GITHUB_URL,
        color: "#ec4899",
    },
    ContactLink {
        icon: "🏢",
        label: "Company",
        value: "SATA Technologies",
        href: "#",
        color: "#10b981",
    },
];

/// Append a two-digit hex alpha to a `#rrggbb` color, as used for tinted
/// backgrounds. Other formats are returned unchanged.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    if color.len() == 7 && color.starts_with('#') {
        format!("{color}{alpha:02x}")
    } else {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_matches_contact_link() {
        assert_eq!(mailto(), CONTACT_LINKS[0].href);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#06b6d4", 0x20), "#06b6d420");
        assert_eq!(with_alpha("red", 0x20), "red");
    }

    #[test]
    fn test_build_year() {
        assert_eq!(BUILD_YEAR.len(), 4);
        assert!(BUILD_YEAR.chars().all(|c| c.is_ascii_digit()));
    }
}
