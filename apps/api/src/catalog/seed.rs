//! Seed data for the opportunity catalog.

use super::{Catalog, Hackathon, Internship, JobRole, Project};

pub fn catalog() -> Catalog {
    Catalog {
        roles: roles(),
        projects: projects(),
        hackathons: hackathons(),
        internships: internships(),
        branches: strings(&[
            "Computer Science",
            "Information Technology",
            "Cybersecurity",
            "AIML",
            "Data Science",
            "IoT",
            "AR/VR",
            "ECE",
        ]),
        skills: strings(&[
            "Python",
            "Java",
            "C++",
            "JavaScript",
            "SQL",
            "Data Structures",
            "Algorithms",
            "Web Development",
            "Databases",
            "Machine Learning",
            "Deep Learning",
            "Computer Vision",
            "Natural Language Processing",
            "Statistics",
            "Calculus",
            "Linear Algebra",
            "Cloud Computing (AWS/Azure/GCP)",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "Networking",
            "Security Principles",
            "Embedded Systems",
            "Unity",
            "C#",
            "3D Modeling",
            "Game Development",
            "Data Visualization",
            "Excel",
            "Cryptography",
            "AR/VR",
            "Graphics Programming",
            "Business Intelligence",
            "TensorFlow/PyTorch",
            "Model Deployment",
            "Scripting (Bash)",
            "Incident Response",
            "Vulnerability Assessment",
            "Sensor Integration",
            "Hardware Programming",
            "Spatial Computing",
            "XR Development",
            "ETL",
            "Big Data (Spark/Hadoop)",
        ]),
    }
}

fn roles() -> Vec<JobRole> {
    vec![
        role("se", "Software Engineer", &[
            "Python", "Java", "Data Structures", "Algorithms", "Web Development",
            "Cloud Computing (AWS/Azure/GCP)", "Databases",
        ]),
        role("da", "Data Analyst", &[
            "Python", "SQL", "Statistics", "Excel", "Data Visualization",
            "Business Intelligence",
        ]),
        role("ml", "ML Engineer", &[
            "Python", "Machine Learning", "Deep Learning", "Calculus", "Linear Algebra",
            "TensorFlow/PyTorch", "Model Deployment",
        ]),
        role("devops", "DevOps Engineer", &[
            "Linux", "Cloud Computing (AWS/Azure/GCP)", "Docker", "Kubernetes", "CI/CD",
            "Scripting (Bash/Python)", "Networking",
        ]),
        role("cyber", "Cybersecurity Analyst", &[
            "Networking", "Security Principles", "Linux", "Python", "Cryptography",
            "Incident Response", "Vulnerability Assessment",
        ]),
        role("iot", "IoT Developer", &[
            "Embedded Systems", "C++", "Python", "Networking", "Cloud Platforms",
            "Sensor Integration", "Hardware Programming",
        ]),
        role("arvr", "AR/VR Developer", &[
            "Unity", "C#", "3D Modeling", "Game Development", "Graphics Programming",
            "Spatial Computing", "XR Development",
        ]),
        role("de", "Data Engineer", &[
            "Python", "SQL", "Databases", "ETL", "Big Data (Spark/Hadoop)",
            "Cloud Computing (AWS/Azure/GCP)",
        ]),
    ]
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "p1",
            "E-commerce Website (Full Stack)",
            &["Web Development", "Python", "Java", "Databases"],
            "Software Engineering",
            "Develop a complete e-commerce platform with user authentication, product listings, shopping cart, and payment integration.",
        ),
        project(
            "p2",
            "Predictive Sales Model",
            &["Python", "Machine Learning", "Data Visualization", "SQL"],
            "Data Science",
            "Build a model to forecast sales based on historical data, marketing spend, and economic indicators.",
        ),
        project(
            "p3",
            "Image Classifier for Medical Diagnosis",
            &["Python", "Deep Learning", "Computer Vision"],
            "AI/ML",
            "Create a CNN model to classify medical images (e.g., X-rays for pneumonia detection).",
        ),
        project(
            "p4",
            "Automated Deployment Pipeline",
            &["Linux", "Docker", "Kubernetes", "CI/CD", "Cloud Computing"],
            "DevOps",
            "Set up an automated CI/CD pipeline for a web application using Jenkins/GitLab CI and deploy to a cloud platform.",
        ),
        project(
            "p5",
            "Smart Home Automation System",
            &["Embedded Systems", "C++", "Python", "IoT", "Networking"],
            "IoT",
            "Develop a system to control smart home devices (lights, thermostat) using a Raspberry Pi and cloud connectivity.",
        ),
        project(
            "p6",
            "AR Navigation App",
            &["Unity", "C#", "AR/VR", "3D Modeling"],
            "AR/VR",
            "Design and implement an augmented reality application for indoor navigation using Unity and ARCore/ARKit.",
        ),
        project(
            "p7",
            "Network Intrusion Detection System",
            &["Python", "Networking", "Cybersecurity"],
            "Cybersecurity",
            "Build a system to detect malicious network activities using packet analysis and machine learning.",
        ),
        project(
            "p8",
            "Sentiment Analysis for Social Media",
            &["Python", "Natural Language Processing", "Machine Learning"],
            "AI/ML",
            "Analyze social media posts to determine public sentiment towards a brand or topic.",
        ),
        project(
            "p9",
            "Data Pipeline for Real-time Analytics",
            &["Python", "SQL", "Big Data (Spark/Kafka)", "Cloud Computing"],
            "Data Engineering",
            "Design and implement a robust data pipeline for real-time data ingestion and processing.",
        ),
    ]
}

fn hackathons() -> Vec<Hackathon> {
    vec![
        hackathon(
            "h1",
            "InnovateX Hackathon",
            &["Web Development", "AI/ML"],
            "Oct 2025",
            "A general hackathon focusing on innovative solutions across various tech domains.",
        ),
        hackathon(
            "h2",
            "Data Science Challenge",
            &["Data Science", "Machine Learning"],
            "Nov 2025",
            "Solve real-world data problems using advanced analytics and machine learning techniques.",
        ),
        hackathon(
            "h3",
            "CyberSec Marathon",
            &["Cybersecurity", "Networking"],
            "Dec 2025",
            "Focus on network security, ethical hacking, and incident response challenges.",
        ),
        hackathon(
            "h4",
            "IoT Solutions Fest",
            &["IoT", "Embedded Systems"],
            "Jan 2026",
            "Develop smart solutions for connected devices and smart environments.",
        ),
    ]
}

fn internships() -> Vec<Internship> {
    vec![
        internship(
            "i1",
            "Software Dev Intern @ TechCorp",
            &["Python", "Java", "Web Development"],
            &["Computer Science", "IT"],
            "Work on backend services for a leading tech company.",
        ),
        internship(
            "i2",
            "Data Science Intern @ AnalyticsCo",
            &["Python", "SQL", "Machine Learning"],
            &["Data Science", "AIML"],
            "Assist in building predictive models and analyzing large datasets.",
        ),
        internship(
            "i3",
            "Cybersecurity Intern @ SecureNet",
            &["Networking", "Linux", "Security Principles"],
            &["Cybersecurity", "IT"],
            "Participate in vulnerability assessments and security audits.",
        ),
    ]
}

fn role(id: &str, name: &str, required_skills: &[&str]) -> JobRole {
    JobRole {
        id: id.to_string(),
        name: name.to_string(),
        required_skills: strings(required_skills),
    }
}

fn project(id: &str, name: &str, skills: &[&str], category: &str, description: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        skills: strings(skills),
        category: category.to_string(),
        description: description.to_string(),
    }
}

fn hackathon(id: &str, name: &str, focus: &[&str], date: &str, description: &str) -> Hackathon {
    Hackathon {
        id: id.to_string(),
        name: name.to_string(),
        focus: strings(focus),
        date: date.to_string(),
        description: description.to_string(),
    }
}

fn internship(
    id: &str,
    name: &str,
    skills: &[&str],
    branch: &[&str],
    description: &str,
) -> Internship {
    Internship {
        id: id.to_string(),
        name: name.to_string(),
        skills: strings(skills),
        branch: strings(branch),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
