//! Display copy for the landing page.

use crate::components::icons::Icon;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub struct Technology {
    pub name: &'static str,
    pub icon: Icon,
    pub role: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const HERO_HIGHLIGHTS: [&str; 3] = [
    "No credit card required",
    "Self-hosted option available",
    "MIT License",
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Seamless Form Creation",
        description: "Create professional forms with our intuitive drag-and-drop interface.",
        icon: Icon::FileText,
    },
    Feature {
        title: "Authentication & Security",
        description: "Enterprise-grade security with advanced authentication options.",
        icon: Icon::Shield,
    },
    Feature {
        title: "Dashboard for Data Management",
        description: "Powerful analytics and data management tools at your fingertips.",
        icon: Icon::BarChart,
    },
    Feature {
        title: "Sharable Form Links",
        description: "Share your forms instantly with customizable access controls.",
        icon: Icon::Share,
    },
];

pub const TECHNOLOGIES: [Technology; 4] = [
    Technology { name: "Next.js", icon: Icon::Code, role: "Frontend Framework" },
    Technology { name: "Prisma", icon: Icon::Database, role: "ORM" },
    Technology { name: "PostgreSQL", icon: Icon::Database, role: "Database" },
    Technology { name: "Auth", icon: Icon::Lock, role: "Authentication" },
];

pub const FAQS: [FaqEntry; 3] = [
    FaqEntry {
        question: "Why should I use FormLab?",
        answer: "FormLab provides an intuitive, secure, and powerful platform for creating and managing forms. With features like drag-and-drop building and advanced analytics, you can streamline your form creation process.",
    },
    FaqEntry {
        question: "Is my data secure?",
        answer: "Yes, we implement enterprise-grade security measures and follow industry best practices to ensure your data is protected at all times.",
    },
    FaqEntry {
        question: "How can I get started?",
        answer: "Simply click the 'Get Started' button, create an account, and you can begin creating forms immediately with our user-friendly interface.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Finally, a form solution that's both powerful and truly free. Game changer!",
        author: "Sarah Chen",
        role: "Frontend Developer",
    },
    Testimonial {
        quote: "The ability to self-host and customize has made this our go-to form solution.",
        author: "Marcus Rodriguez",
        role: "Tech Lead",
    },
    Testimonial {
        quote: "Beautiful UI, great documentation, and amazing community support.",
        author: "Jessica Kim",
        role: "Product Manager",
    },
];
