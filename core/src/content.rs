//! Static portfolio content
//!
//! Everything here is fixed at build time and lives for the whole
//! process. Sections borrow from these tables; nothing mutates them.

/// Identity shown in the header, hero and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

/// Anchor in the single-page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Kind of external profile, used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

/// External profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

/// A skill and its proficiency, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Proficiency as a bar width, clamped to 100.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

/// One entry of the experience timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

/// A showcased project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub categories: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub repository: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl Project {
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| *c == label)
    }
}

/// Short biography blocks for the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub image: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub education: [&'static str; 2],
    pub location: [&'static str; 2],
}

pub const PROFILE: Profile = Profile {
    name: "Udita Nolkha",
    greeting: "Hello, I'm",
    role: "Computer Science Student",
    tagline: "",
    portrait: "/static/image/main.jpeg",
    email: "uditanolkha@gmail.com",
    phone: "+918829942842",
    address: "B-284,R.K.colony,Bhilwara,Rajasthan",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Github,
        label: "GitHub",
        href: "https://github.com/uditanolkha",
    },
    SocialLink {
        kind: SocialKind::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/udita-nolkha",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "Twitter",
        href: "https://twitter.com",
    },
];

pub const ABOUT: About = About {
    image: "https://images.pexels.com/photos/3861958/pexels-photo-3861958.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    heading: "Who I Am",
    paragraphs: &[
        "I am a computer science student, I see myself as a hardworking and enthusiastic individual eager to \
         acquire new skills. I am excited about gaining my first work experience. I am eager to apply my \
         theoretical knowledge in a practical setting, collaborate with experienced professionals, and contribute \
         to meaningful projects.",
        "Furthermore, I am committed to continuous learning and personal growth, always seeking opportunities \
         to enhance my technical and soft skills.",
        "When I'm not coding, you can find me exploring new design trends, attending tech meetups, or enjoying \
         outdoor activities to recharge my creative energy.",
    ],
    education: ["B.Tech in Computer Science", "Rajasthan Technical University"],
    location: ["Bhilwara ,Rajasthan", "Open to Remote Work"],
};

pub const SKILLS_INTRO: &str =
    "I've learned a variety of technologies and tools throughout my collegelife. Here are some of my key skills:";

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "HTML/CSS", level: 95 },
    Skill { name: "Git", level: 90 },
    Skill { name: "Responsive Design", level: 80 },
    Skill { name: "C/C++", level: 90 },
    Skill { name: "Java", level: 75 },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    title: "Frontend Developer",
    organization: "CSRBOX",
    period: "Jun,2024-August,2024",
    description: "Mastered core front-end tools and techniques, including HTML, CSS, and JavaScript.\
                  Completed practical projects focused on building responsive websites and improving usability.",
    skills: &["JavaScript", "HTML/CSS", "Responsive Design", "Bootstrap"],
}];

pub const PROJECTS_INTRO: &str =
    "Here are some of the projects I've worked on. Click on them to learn more.";

// Project 1 is labelled "WebSite" upstream; the label is kept verbatim so
// the "Website" filter only matches project 2.
pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Women Empowerment",
        description: "Front End Web Development Project On Gender Equality",
        image: "/static/images/project1.jpeg",
        categories: &["WebSite", "Dashboard"],
        technologies: &["HTML", "JavaScript", "CSS"],
        repository: Some("https://github.com/uditanolkha/FEWD-PROJECT-"),
        live: None,
    },
    Project {
        id: 2,
        title: "Portfolio Website",
        description: "A personal portfolio website showcasing projects, skills, and professional experience.",
        image: "https://images.pexels.com/photos/1181298/pexels-photo-1181298.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        categories: &["Website", "Portfolio"],
        technologies: &["React", "Framer Motion", "Tailwind CSS", "Vite"],
        repository: Some("https://github.com/uditanolkha"),
        live: None,
    },
];
