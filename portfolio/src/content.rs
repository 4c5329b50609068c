//! Page copy. Fixed at build time.

use crate::sections::{ICON_BRIEFCASE, ICON_CODE, ICON_LAYERS};

/// Owner of the portfolio.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static [&'static str],
}

/// One position in the work history.
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

/// A titled list of skills with its icon.
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Phani Chandra Sekhar Avagaddi",
    title: "Senior Engineering Manager",
    summary: &[
        "With 21 years of IT expertise, I spearhead complex software products and services across diverse IT landscapes. ",
        "Recently augmented my skillset with AI and ML, ready to drive ground-breaking AI initiatives and enhance organizational performance.",
    ],
};

/// Newest first.
pub const JOBS: &[Job] = &[
    Job {
        title: "Sr Engineering Manager",
        company: "Envoy Global",
        period: "Nov 2022 to Present",
    },
    Job {
        title: "Sr Technical Project Manager",
        company: "Pactera Edge",
        period: "May 2019 to Nov 2022",
    },
    Job {
        title: "Group Manager (TPM)",
        company: "DST Worldwide Services",
        period: "Jun 2017 to May 2019",
    },
    Job {
        title: "Technical Project Manager",
        company: "Infosys Ltd",
        period: "Mar 2015 to May 2017",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        icon: ICON_CODE,
        title: "Programming",
        skills: &["C#", "Python", "JavaScript", "HTML", "SQL", "jQuery"],
    },
    SkillGroup {
        icon: ICON_LAYERS,
        title: "Frameworks",
        skills: &["ASP.NET Core", "MVC", "Angular", "React", "NodeJS"],
    },
    SkillGroup {
        icon: ICON_BRIEFCASE,
        title: "AI/ML",
        skills: &[
            "Gen AI",
            "Machine Learning",
            "Deep Learning",
            "NLP",
            "Speech Recognition",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Internal Chatbot based on LEMMA",
        tech: "Python, ReactJS, NodeJS, Azure AI",
    },
    Project {
        title: "Automatic Speech Recognition (ASR)",
        tech: "Python, Fast API, Deep Learning, HMM-GMM Statistical Model",
    },
    Project {
        title: "Envoy Global VISA Immigration platform",
        tech: "C#, Angular, Web API, ASP.NET MVC, SQL Server",
    },
    Project {
        title: "Brokerage Operations Support System",
        tech: "C#, WinForms, Web API, WPF, SQL Server",
    },
];

pub const COPYRIGHT_YEAR: u16 = 2024;

pub fn copyright() -> String {
    format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_owner() {
        assert_eq!(
            copyright(),
            "© 2024 Phani Chandra Sekhar Avagaddi. All rights reserved."
        );
    }

    #[test]
    fn every_entry_is_filled_in() {
        assert!(JOBS.iter().all(|j| !j.title.is_empty() && !j.company.is_empty() && !j.period.is_empty()));
        assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty() && !g.icon.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.title.is_empty() && !p.tech.is_empty()));
    }

    #[test]
    fn current_role_comes_first() {
        assert_eq!(JOBS[0].period, "Nov 2022 to Present");
    }
}
