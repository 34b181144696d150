//! Fixed copy for the informational pages. None of this lives in the
//! document store; editing it means a redeploy.

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub struct CurriculumYear {
    pub year: &'static str,
    pub title: &'static str,
    pub subjects: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub author: &'static str,
    pub year: &'static str,
    pub image: &'static str,
}

pub const COLLEGE_NAME: &str = "College of Information and Technology";
pub const UNIVERSITY_NAME: &str = "University of the Assumption";

pub const HIGHLIGHTS: &[Card] = &[
    Card {
        title: "Awards & Recognition",
        description: "Our students and faculty bring home honours from regional and national competitions.",
    },
    Card {
        title: "Student Activities",
        description: "Organizations, hackathons and seminars that build skills beyond the classroom.",
    },
    Card {
        title: "Research Projects",
        description: "Capstone and faculty research that solves problems for real communities.",
    },
    Card {
        title: "Community Events",
        description: "Outreach programs that bring technology education to our neighbours.",
    },
];

pub const WHY_CHOOSE: &[Card] = &[
    Card {
        title: "Industry Connections",
        description: "Partnerships that open doors to internships and employment.",
    },
    Card {
        title: "Cutting-Edge Facilities",
        description: "Laboratories equipped for networking, development and data work.",
    },
    Card {
        title: "Expert Faculty",
        description: "Mentors with academic credentials and industry experience.",
    },
    Card {
        title: "Innovation Focus",
        description: "A curriculum that keeps pace with a changing field.",
    },
];

pub const SPECIALIZATIONS: &[Card] = &[
    Card {
        title: "Web & Mobile Development",
        description: "Design and build applications for the web and mobile platforms.",
    },
    Card {
        title: "Networking & Cybersecurity",
        description: "Plan, secure and maintain the networks organizations depend on.",
    },
    Card {
        title: "Data & Systems",
        description: "Manage databases and information systems and turn data into decisions.",
    },
];

pub const CAREERS: &[Card] = &[
    Card { title: "Full-Stack Developer", description: "Build end-to-end web applications and systems" },
    Card { title: "Cybersecurity Analyst", description: "Protect systems and analyze security threats" },
    Card { title: "Mobile App Developer", description: "Create innovative mobile applications" },
    Card { title: "Network Engineer", description: "Design and maintain network infrastructure" },
    Card { title: "Data Analyst", description: "Transform data into actionable business insights" },
    Card { title: "Cloud Solutions Architect", description: "Design and implement cloud-based solutions" },
    Card { title: "Systems Administrator", description: "Manage and maintain IT infrastructure" },
    Card { title: "UI/UX Designer", description: "Create beautiful and user-friendly interfaces" },
    Card { title: "DevOps Engineer", description: "Automate deployment and infrastructure management" },
];

pub const CURRICULUM: &[CurriculumYear] = &[
    CurriculumYear {
        year: "First Year",
        title: "Foundations",
        subjects: &["Introduction to Computing", "Computer Programming 1 & 2", "Discrete Mathematics"],
    },
    CurriculumYear {
        year: "Second Year",
        title: "Core IT Skills",
        subjects: &["Data Structures and Algorithms", "Information Management", "Networking 1"],
    },
    CurriculumYear {
        year: "Third Year",
        title: "Applied IT & Specialization",
        subjects: &["Systems Integration and Architecture", "Information Assurance and Security", "Track Electives"],
    },
    CurriculumYear {
        year: "Fourth Year",
        title: "Integration & Practice",
        subjects: &["Capstone Project 1 & 2", "IT Service Management", "Practicum"],
    },
];

pub const LEARNING_OUTCOMES: &[Card] = &[
    Card { title: "High-quality education", description: "Apply computing knowledge to solve problems." },
    Card { title: "Expert faculty mentors", description: "Learn from practitioners and researchers." },
    Card { title: "Hands-on experience", description: "Build working systems throughout the program." },
    Card { title: "Adapt to innovation", description: "Keep learning as technology changes." },
    Card { title: "Lifelong and accountable", description: "Act ethically and responsibly as IT professionals." },
];

pub const FEATURED_PROJECTS: &[Project] = &[
    Project {
        title: "ResiLinked",
        summary: "A resident management system that streamlines communication between residents and local government units.",
        author: "CIT Research Team",
        year: "Class of 2024",
        image: "/static/images/research/resilinked.jpg",
    },
    Project {
        title: "SoilScope",
        summary: "IoT soil monitoring that helps farmers improve crop yields with real-time soil analysis.",
        author: "CIT Research Team",
        year: "Class of 2024",
        image: "/static/images/research/soilscope.jpg",
    },
    Project {
        title: "UA Clinic System",
        summary: "Appointment scheduling, patient records and health monitoring for the university clinic.",
        author: "CIT Research Team",
        year: "Class of 2024",
        image: "/static/images/research/ua-clinic.jpg",
    },
];

pub const AWARD_IMAGES: &[&str] = &[
    "/static/images/awards/awards1.jpg",
    "/static/images/awards/awards2.jpg",
    "/static/images/awards/awards3.jpg",
    "/static/images/awards/awards4.jpg",
    "/static/images/awards/awards5.jpg",
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email",
        value: "cit@ua.edu.ph",
        link: Some("mailto:cit@ua.edu.ph"),
    },
    ContactInfo {
        title: "Phone",
        value: "+63 (45) 961-1196",
        link: Some("tel:+63459611196"),
    },
    ContactInfo {
        title: "Address",
        value: "2MQX+573, 11th Avenue, San Fernando City, Pampanga, Philippines",
        link: None,
    },
];
