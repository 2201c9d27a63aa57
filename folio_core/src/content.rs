//! Static portfolio content.
//!
//! Everything the site shows lives here as plain data. A config file can
//! replace it wholesale (see [`crate::utils::config::Config`]).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Cycled by the hero typewriter.
    pub roles: Vec<String>,
    pub about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage in 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechBadge {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub title: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub skill_categories: Vec<SkillCategory>,
    pub tech_badges: Vec<TechBadge>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactInfo>,
    pub socials: Vec<SocialLink>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn project(title: &str, description: &str, image: &str, technologies: &[&str], github_url: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        technologies: strings(technologies),
        github_url: github_url.to_string(),
        live_url: "#".to_string(),
    }
}

impl PortfolioContent {
    /// The content shipped with the site.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Jwalant Bhatt".to_string(),
                headline: "Platform Engineer at NIH".to_string(),
                roles: strings(&["DevOps Enthusiast", "Platform Engineer at NIH", "FIFA fanatic"]),
                about: strings(&[
                    "I'm a Platform Engineer at the National Institutes of Health (NIH), where I architect \
                     and maintain the infrastructure that powers critical biomedical research applications. \
                     My work focuses on building robust CI/CD pipelines, automating deployments, and ensuring \
                     high availability for systems that researchers depend on worldwide.",
                    "With expertise in Kubernetes, Docker, Jenkins, and cloud platforms, I specialize in \
                     creating scalable infrastructure that enables teams to deploy faster and more reliably. \
                     I'm passionate about DevOps best practices, infrastructure as code, and building tools \
                     that make developers' lives easier.",
                    "When I'm not architecting platforms or automating workflows, you'll find me playing FIFA, \
                     exploring new DevOps tools, or contributing to open-source projects. I believe in continuous \
                     learning and staying at the forefront of cloud-native technologies.",
                ]),
            },
            stats: vec![
                Stat { label: "Years Experience".to_string(), value: "3+".to_string() },
                Stat { label: "CI/CD Pipelines".to_string(), value: "50+".to_string() },
                Stat { label: "DevOps Tools".to_string(), value: "20+".to_string() },
                Stat { label: "System Uptime".to_string(), value: "99.9%".to_string() },
            ],
            skill_categories: vec![
                SkillCategory {
                    category: "Languages".to_string(),
                    skills: vec![
                        skill("Python", 95),
                        skill("Bash", 85),
                        skill("C/C++", 75),
                        skill("SQL/PL-SQL", 80),
                    ],
                },
                SkillCategory {
                    category: "Cloud & Infrastructure".to_string(),
                    skills: vec![
                        skill("AWS", 90),
                        skill("Kubernetes", 88),
                        skill("Docker", 92),
                        skill("Terraform", 85),
                    ],
                },
                SkillCategory {
                    category: "DevOps & CI/CD".to_string(),
                    skills: vec![
                        skill("GitLab CI", 90),
                        skill("Jenkins", 85),
                        skill("Ansible", 82),
                        skill("ArgoCD", 88),
                    ],
                },
            ],
            tech_badges: [
                ("Python", "🐍"),
                ("Kubernetes", "☸️"),
                ("Docker", "🐳"),
                ("AWS", "☁️"),
                ("Terraform", "🏗️"),
                ("GitLab", "🦊"),
                ("Jenkins", "🔧"),
                ("Ansible", "⚙️"),
                ("ArgoCD", "🚀"),
                ("Kafka", "📊"),
                ("Istio", "🔒"),
                ("Linux", "🐧"),
            ]
            .iter()
            .map(|(name, icon)| TechBadge {
                name: name.to_string(),
                icon: icon.to_string(),
            })
            .collect(),
            experience: vec![
                Experience {
                    title: "Platform Systems Engineer - DevOps".to_string(),
                    company: "National Centre for Biotechnology Information, NIH".to_string(),
                    period: "October 2023 - Present".to_string(),
                    description: "Engineered sweeper system reducing infrastructure resource usage by 20%. \
                        Implemented Istio-based whitelisting for FISMA High compliance. Streamlined deployment \
                        monitoring with Kafka integration in CI pipelines. Developed centralized LDAP-based access \
                        model eliminating hard-coded permissions."
                        .to_string(),
                    technologies: strings(&["ArgoCD", "Istio", "Kafka", "LDAP", "Kubernetes", "CI/CD"]),
                },
                Experience {
                    title: "Software Engineer Intern".to_string(),
                    company: "Element Solutions".to_string(),
                    period: "September 2022 - April 2023".to_string(),
                    description: "Optimized healthcare data processing with scalable pipelines on AWS & GCP using \
                        Python. Containerized PoC application with Docker, improving deployment efficiency by 25%. \
                        Automated infrastructure provisioning using Terraform, reducing launch time by 60%. \
                        Streamlined EC2 configuration with Ansible, improving TTL by 15%."
                        .to_string(),
                    technologies: strings(&["AWS", "GCP", "Python", "Docker", "Terraform", "Ansible"]),
                },
                Experience {
                    title: "Graduate Grading Assistant".to_string(),
                    company: "SUNY Binghamton - CS 580".to_string(),
                    period: "August 2022 - December 2022".to_string(),
                    description: "Automated evaluation and preprocessing with Python scripts, reducing grading \
                        time by 30%. Guided students in deep learning concepts including CNNs, RNNs & \
                        back-propagation. Developed Python program to efficiently process 9000 MNIST images for \
                        training models."
                        .to_string(),
                    technologies: strings(&["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Jupyter"]),
                },
            ],
            projects: vec![
                project(
                    "Microservice Vote Tracking Application",
                    "Microservice-based architecture with APIs for real-time vote tallies. Deployed Flask web app \
                     on EC2 with Kubernetes orchestration, achieving 30% performance increase. Integrated Jenkins \
                     CI/CD pipeline for resilient AWS infrastructure.",
                    "🗳️",
                    &["Python", "Flask", "Kubernetes", "Jenkins", "AWS", "SQL Server"],
                    "https://github.com/jwalant527",
                ),
                project(
                    "AWS Fault Injection Testing",
                    "Enhanced infrastructure resilience using AWS Fault Injection Simulator. Tested instance \
                     failures, network latency, and API throttling. Orchestrated multi-step errors with Lambda & \
                     Step Functions, reducing response time by 15%.",
                    "⚡",
                    &["AWS", "Lambda", "Step Functions", "SSM", "Linux"],
                    "https://github.com/jwalant527",
                ),
                project(
                    "Handwritten Digit Recognition",
                    "Neural network model using TensorFlow and Pandas achieving 91%+ accuracy. Implemented \
                     logistic regression and back-propagation algorithms. Refined performance by 25% through \
                     hyperparameter tuning and custom preprocessing.",
                    "🔢",
                    &["Python", "TensorFlow", "Pandas", "Matplotlib", "Seaborn"],
                    "https://github.com/jwalant527",
                ),
                project(
                    "ArgoCD Sweeper System",
                    "Automated system to remove stale ArgoCD deployments, reducing infrastructure resource usage \
                     by 20%. Integrated with Kubernetes to maintain clean deployment environments and optimize \
                     resource allocation.",
                    "🧹",
                    &["ArgoCD", "Kubernetes", "Python", "Automation"],
                    "#",
                ),
                project(
                    "Istio Service Mesh Implementation",
                    "Implemented Istio-based whitelisting for external endpoints with dynamic service entry \
                     generation. Maintained FISMA High compliance while enabling secure communication with vetted \
                     external services.",
                    "🔒",
                    &["Istio", "Kubernetes", "Service Mesh", "Security"],
                    "#",
                ),
                project(
                    "CI/CD Monitoring with Kafka",
                    "Streamlined deployment monitoring by integrating Kafka event consumption into CI pipelines. \
                     Eliminated database dependencies and enabled real-time rollout status checks for faster \
                     deployment feedback.",
                    "📊",
                    &["Kafka", "CI/CD", "Jenkins", "Event Streaming"],
                    "#",
                ),
            ],
            contact: vec![
                ContactInfo {
                    title: "Email".to_string(),
                    value: "jwalantbhatt1998@gmail.com".to_string(),
                    href: "mailto:jwalantbhatt1998@gmail.com".to_string(),
                },
                ContactInfo {
                    title: "Location".to_string(),
                    value: "Memphis, TN".to_string(),
                    href: "#".to_string(),
                },
            ],
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    href: "https://github.com/jwalant527".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com/in/jwalantb/".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    href: "https://twitter.com/jwalant527".to_string(),
                },
            ],
        }
    }

    /// All skills in display order, flattened across categories.
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skill_categories.iter().flat_map(|c| c.skills.iter())
    }
}
