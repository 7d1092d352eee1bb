//! Page content. Everything here is fixed at compile time.

use super::navigation::{PageLayout, Section};

/// A portfolio entry. Identified by position; titles may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Automated Backup System",
        description: "Jenkins + rclone to AWS S3/Google Drive for automated and scheduled backup operations.",
        tags: &["Jenkins", "AWS S3", "rclone"],
    },
    Project {
        title: "AI/ML Deployment Pipeline",
        description: "CI/CD with Jenkins, Kubernetes, Docker, and Terraform for machine learning model deployment.",
        tags: &["Docker", "Kubernetes", "Terraform"],
    },
    Project {
        title: "Microservices CI/CD",
        description: "Docker, Kubernetes, Nexus, SonarQube, Grafana implementation for microservices architecture.",
        tags: &["Microservices", "SonarQube", "Grafana"],
    },
    Project {
        title: "AWS Serverless App",
        description: "API Gateway, Terraform, GitHub Actions for serverless application deployment.",
        tags: &["Serverless", "API Gateway", "GitHub Actions"],
    },
    Project {
        title: "Automated Cloud Infrastructure with Terraform & Ansible",
        description: "Automated deployment of AWS EC2 instances, security groups, and networking using Terraform, and seamless server configuration with Ansible.",
        tags: &["Terraform", "Ansible", "AWS EC2", "VPC", "Security Groups", "Jenkins (CI/CD)"],
    },
    Project {
        title: "Resource Manager - Real-time CPU Monitoring and Analysis",
        description: "A real-time CPU monitoring and analysis tool offering live visualizations, critical alerts, historical trends, and process tracking, all containerized with Docker.",
        tags: &["Python", "Docker", "Grafana"],
    },
    Project {
        title: "Todo App Deployment on Kubernetes",
        description: "A Todo App built with React and Firebase for real-time storage, containerized using Docker, and deployed on Docker Hub.",
        tags: &["Docker", "Kubernetes", "Docker Hub"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Cloud & Infrastructure",
        skills: &["AWS", "Terraform", "Ansible", "Linux"],
    },
    SkillGroup {
        title: "Containerization",
        skills: &["Docker", "Kubernetes", "Helm"],
    },
    SkillGroup {
        title: "CI/CD & Monitoring",
        skills: &["Jenkins", "GitHub Actions", "Prometheus", "Grafana"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub footer_blurb: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Muhammad Anas Naeem",
    initials: "AN",
    title: "DevOps Engineer",
    tagline: "Building scalable, automated infrastructure and optimizing deployment pipelines to power the next generation of applications.",
    footer_blurb: "DevOps Engineer passionate about creating scalable and efficient infrastructure solutions.",
};

pub const ABOUT: &[&str] = &[
    "I'm an aspiring DevOps Engineer, actively building my skills in Linux OS, AWS, solution architecture, Docker, Kubernetes, Jenkins, Terraform, and CI/CD practices. I'm passionate about leveraging these technologies to create efficient, scalable, and resilient systems.",
    "My goal is to contribute to teams by streamlining workflows, automating processes, and enabling smoother development and deployment cycles. I believe in the power of automation and infrastructure as code to solve complex operational challenges.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub context: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: Experience = Experience {
    role: "DevOps Engineer (Projects)",
    context: "Self-directed projects & hands-on learning",
    period: "2023 - Present",
    summary: "Currently working on various hands-on projects in DevOps and Cloud deployment to build practical experience with industry-standard tools and methodologies.",
    highlights: &[
        "Automating infrastructure deployment with Terraform and AWS",
        "Building CI/CD pipelines with Jenkins and GitHub Actions",
        "Containerizing applications with Docker and Kubernetes",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "BS Software Engineering",
    institution: "University of Karachi, Department of Computer Science",
    period: "2022 - Active",
    summary: "Studying Software Engineering with a focus on DevOps practices, cloud computing, and modern software development methodologies.",
    location: "Karachi, Pakistan",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "anas.naeem.998@gmail.com",
    },
    ContactDetail {
        label: "Phone",
        value: "+92 324 2009744",
    },
    ContactDetail {
        label: "Location",
        value: "Karachi, Pakistan",
    },
    ContactDetail {
        label: "Languages",
        value: "Urdu, English",
    },
];

pub const BACKGROUND_IMAGE: &str = "background.jpg";
pub const PROFILE_IMAGE: &str = "profile.jpg";

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, PROFILE.name)
}

/// Every distinct tag and skill label shown on the page, in first-seen order.
pub fn all_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    let tags = PROJECTS.iter().flat_map(|p| p.tags.iter());
    let skills = SKILL_GROUPS.iter().flat_map(|g| g.skills.iter());
    for label in tags.chain(skills) {
        if !labels.contains(label) {
            labels.push(label);
        }
    }
    labels
}

/// Estimated vertical extents of the rendered page, in render order.
pub fn page_layout() -> PageLayout {
    let project_rows = PROJECTS.len().div_ceil(2) as f32;
    PageLayout::new()
        .block(5.0)
        .block(1.0)
        .anchored(Section::About.anchor(), 1.0 + 1.5 * ABOUT.len() as f32)
        .anchored(
            Section::Experience.anchor(),
            3.0 + EXPERIENCE.highlights.len() as f32,
        )
        .anchored(Section::Projects.anchor(), 1.0 + 3.0 * project_rows)
        .anchored(Section::Skills.anchor(), 1.0 + 2.0 * SKILL_GROUPS.len() as f32)
        .anchored(Section::Education.anchor(), 4.0)
        .anchored(
            Section::Contact.anchor(),
            2.0 + CONTACT_DETAILS.len() as f32 * 1.5,
        )
        .block(4.0)
}
