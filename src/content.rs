//! Static content manifest. Order in every slice is display order.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Code,
    Server,
    Briefcase,
    Bot,
    Smartphone,
    GraduationCap,
    Github,
    Linkedin,
    Mail,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[cfg(test)]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn layout_class(self) -> &'static str {
        match self {
            Self::Left => "timeline-item--left",
            Self::Right => "timeline-item--right",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub live_link: &'static str,
    pub code_link: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimelineEntry {
    pub icon: Icon,
    pub date: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub side: Side,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub struct Profile {
    pub name: &'static str,
    pub portrait: &'static str,
    pub about_image: &'static str,
    pub about: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub copyright: &'static str,
}

/// Section anchors, in page order.
#[cfg(test)]
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "projects", "experience", "contact"];

pub const PROFILE: Profile = Profile {
    name: "Dilshan",
    portrait: "/assets/me.jpg",
    about_image: "/assets/image5.jpg",
    about: &[
        "Hello! I'm a final-year Software Engineering student at the Sabaragamuwa University of Sri Lanka. My passion lies in creating efficient, scalable, and user-friendly software solutions.",
        "I enjoy working across the stack, from responsive interfaces to the services and models behind them, and I'm always picking up something new along the way.",
    ],
    contact_blurb: "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, I'll try my best to get back to you!",
    copyright: "© 2025 Dilshan. All Rights Reserved.",
};

pub const TAGLINES: [&str; 5] = [
    "A passionate Software Engineering Student.",
    "A Full-Stack Developer.",
    "A Machine Learning Enthusiast.",
    "A Mobile App Developer.",
    "A Lifelong Learner.",
];

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Frontend",
        icon: Icon::Code,
        skills: &["React", "JavaScript (ES6+)", "HTML5 & CSS3", "Tailwind CSS", "TypeScript"],
    },
    SkillCategory {
        title: "Backend",
        icon: Icon::Server,
        skills: &["Node.js", "Express.js", "Python (Flask)", "Java (Spring Boot)", "REST APIs"],
    },
    SkillCategory {
        title: "Databases & Others",
        icon: Icon::Briefcase,
        skills: &["MySQL", "MongoDB", "Git & GitHub", "Docker", "AWS Basics"],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        icon: Icon::Bot,
        skills: &["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas"],
    },
    SkillCategory {
        title: "Mobile Development",
        icon: Icon::Smartphone,
        skills: &["React Native", "Flutter", "Java/Kotlin (Android)", "Swift (iOS)", "Firebase"],
    },
];

pub const PROJECTS: [ProjectCard; 3] = [
    ProjectCard {
        title: "To Do App",
        description: "A simple React app to manage daily tasks with add, edit, and delete functionality.",
        tags: &["React", "CSS"],
        image: "/assets/todo.jpg",
        live_link: "#",
        code_link: "#",
    },
    ProjectCard {
        title: "Weather App",
        description: "A web app that fetches live weather data using an API and displays it in a clean UI.",
        tags: &["React", "API", "JavaScript"],
        image: "/assets/weather.webp",
        live_link: "#",
        code_link: "#",
    },
    ProjectCard {
        title: "Calculator",
        description: "A responsive calculator app built with React, performing basic arithmetic operations.",
        tags: &["React", "JavaScript", "CSS"],
        image: "/assets/calculater-beauty.jpg",
        live_link: "#",
        code_link: "#",
    },
];

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        icon: Icon::Briefcase,
        date: "2024 - Present",
        title: "Machine Learning Enthusiast",
        organization: "Independent",
        description: "Building and evaluating models for personal and client projects, and contributing to a client web application with React and Node.js.",
        side: Side::Left,
    },
    TimelineEntry {
        icon: Icon::GraduationCap,
        date: "2021 - 2025 (Expected)",
        title: "BSc (Hons) in Software Engineering",
        organization: "Sabaragamuwa University of Sri Lanka",
        description: "Pursuing a comprehensive curriculum covering software design, development, testing, and project management.",
        side: Side::Right,
    },
    TimelineEntry {
        icon: Icon::Briefcase,
        date: "Summer 2023",
        title: "Freelance Web Developer",
        organization: "Self-Employed",
        description: "Designed and developed a responsive website for a local business.",
        side: Side::Left,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { href: "#", label: "GitHub", icon: Icon::Github },
    SocialLink { href: "#", label: "LinkedIn", icon: Icon::Linkedin },
    SocialLink {
        href: "mailto:your.email@example.com",
        label: "Email",
        icon: Icon::Mail,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_every_section_in_order() {
        let anchors: Vec<&str> = NAV_LINKS
            .iter()
            .map(|link| link.href.trim_start_matches('#'))
            .collect();
        assert_eq!(anchors, SECTION_IDS);
    }

    #[test]
    fn skill_categories_keep_five_skills_each() {
        assert_eq!(SKILL_CATEGORIES.len(), 5);
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 5, "{}", category.title);
        }
        assert_eq!(SKILL_CATEGORIES[0].title, "Frontend");
    }

    #[test]
    fn timeline_alternates_sides() {
        for pair in TIMELINE.windows(2) {
            assert_eq!(pair[0].side.opposite(), pair[1].side);
        }
    }

    #[test]
    fn opposite_sides_use_different_layout_classes() {
        assert_ne!(Side::Left.layout_class(), Side::Right.layout_class());
        assert_eq!(Side::Left.opposite().opposite(), Side::Left);
    }

    #[test]
    fn taglines_are_non_empty() {
        assert!(!TAGLINES.is_empty());
        assert!(TAGLINES.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn project_tags_are_unique_per_card() {
        for project in PROJECTS {
            let mut tags = project.tags.to_vec();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), project.tags.len(), "{}", project.title);
        }
    }
}
