//! Static copy and link data rendered by the page sections.

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const HERO_ID: &str = "hero";
pub const SERVICES_ID: &str = "services";
pub const PROJECTS_ID: &str = "projects";
pub const TESTIMONIALS_ID: &str = "testimonials";
pub const CONTACT_ID: &str = "contact";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: SERVICES_ID,
        label: "Services",
    },
    NavItem {
        id: PROJECTS_ID,
        label: "Projects",
    },
    NavItem {
        id: TESTIMONIALS_ID,
        label: "Testimonials",
    },
];

pub const CONTACT_NAV: NavItem = NavItem {
    id: CONTACT_ID,
    label: "Let's Craft Something Together",
};

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Responsive, accessible sites and web apps built with modern frameworks and a focus on performance.",
        icon: "devicon-html5-plain",
    },
    Service {
        title: "UI / UX Design",
        description: "Clean interfaces and thoughtful interactions, from wireframes to polished, animated components.",
        icon: "devicon-figma-plain",
    },
    Service {
        title: "Backend & APIs",
        description: "Reliable services and APIs that keep your product fast, secure and easy to extend.",
        icon: "devicon-nodejs-plain",
    },
    Service {
        title: "Performance Tuning",
        description: "Audits and fixes that cut load times, shrink bundles and improve Core Web Vitals.",
        icon: "devicon-chrome-plain",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Shop Front",
        summary: "An e-commerce storefront with product search, a persistent cart and a streamlined checkout.",
        tags: &["React", "Tailwind", "Stripe"],
        link: "https://github.com/yourusername/shop-front",
    },
    Project {
        title: "Task Board",
        summary: "A kanban-style planner with drag and drop, labels and real-time sync between teammates.",
        tags: &["TypeScript", "WebSockets"],
        link: "https://github.com/yourusername/task-board",
    },
    Project {
        title: "Weather Now",
        summary: "A lightweight forecast dashboard with location lookup and animated conditions.",
        tags: &["JavaScript", "REST"],
        link: "https://github.com/yourusername/weather-now",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Delivered ahead of schedule and the site has been rock solid since launch. Communication was excellent throughout.",
        author: "Sarah Thompson",
        role: "Founder, Bloom Studio",
    },
    Testimonial {
        quote: "Turned a vague idea into a product our customers love. Great eye for detail and always open to feedback.",
        author: "Michael Chen",
        role: "Product Manager, Nimbus",
    },
    Testimonial {
        quote: "Our page load times dropped by half after the performance pass. Highly recommended.",
        author: "Priya Sharma",
        role: "CTO, Fieldnote",
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Email",
        value: "hello@yourname.com",
        link: "mailto:hello@yourname.com",
        icon: "extra-email",
    },
    ContactMethod {
        title: "Phone",
        value: "+1 (555) 123-4567",
        link: "tel:+15551234567",
        icon: "extra-phone",
    },
    ContactMethod {
        title: "Location",
        value: "San Francisco, CA",
        link: "https://maps.google.com/?q=San+Francisco,+CA",
        icon: "extra-location",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/yourusername",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/yourprofile",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com/yourhandle",
        icon: "devicon-twitter-original",
    },
];

/// Ids of every section the page renders, in page order.
pub const SECTION_IDS: &[&str] = &[HERO_ID, SERVICES_ID, PROJECTS_ID, TESTIMONIALS_ID, CONTACT_ID];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_exist() {
        for item in NAV_ITEMS.iter().chain([&CONTACT_NAV]) {
            assert!(
                SECTION_IDS.contains(&item.id),
                "nav item {} has no section",
                item.label
            );
        }
        assert_eq!(CONTACT_NAV.href(), "#contact");
    }

    #[test]
    fn test_contact_links_have_schemes() {
        for method in CONTACT_METHODS {
            assert!(
                ["mailto:", "tel:", "https://"]
                    .iter()
                    .any(|p| method.link.starts_with(p)),
                "{} has no usable link",
                method.title
            );
        }
        assert!(SOCIAL_LINKS.iter().all(|s| s.url.starts_with("https://")));
    }

    #[test]
    fn test_projects_are_tagged() {
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }
}
