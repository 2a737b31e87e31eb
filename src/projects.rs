//! Hand-authored project case studies. The dataset is static and compiled
//! into both the server and the WASM bundle; lookups by slug are how the
//! `/project/:slug` route resolves, with a miss rendering the not-found view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub screenshots: &'static [Screenshot],
    pub demo: &'static str,
    pub github: &'static str,
    pub featured: bool,
    pub category: &'static str,
    pub sections: &'static [ProjectSection],
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSection {
    pub title: &'static str,
    pub content: &'static str,
    pub code: Option<&'static str>,
    pub code_language: &'static str,
}

impl ProjectSection {
    const fn text(title: &'static str, content: &'static str) -> Self {
        ProjectSection {
            title,
            content,
            code: None,
            code_language: "",
        }
    }

    const fn with_code(
        title: &'static str,
        content: &'static str,
        language: &'static str,
        code: &'static str,
    ) -> Self {
        ProjectSection {
            title,
            content,
            code: Some(code),
            code_language: language,
        }
    }
}

pub fn get_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Projects in the same category, excluding `slug`, for the related strip on
/// the details page.
pub fn related_projects(slug: &str, category: &str, limit: usize) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.category == category && p.slug != slug)
        .take(limit)
        .collect()
}

/// Distinct categories in dataset order, for the filter bar.
pub fn categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for p in PROJECTS {
        if !out.contains(&p.category) {
            out.push(p.category);
        }
    }
    out
}

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "laravel-ecommerce-platform",
        title: "Laravel E-commerce Platform",
        description: "A full-featured e-commerce solution with user authentication, shopping cart, order management, and a comprehensive admin dashboard.",
        long_description: "This e-commerce platform covers the complete shopping experience from product browsing to checkout, along with a powerful admin dashboard for managing products, orders, and customers. It demonstrates scalable, secure full-stack work with Laravel on the backend and a responsive Bootstrap frontend.",
        tech: &["Laravel", "PHP", "MySQL", "Bootstrap", "JavaScript"],
        features: &[
            "Authentication",
            "Cart System",
            "Order Management",
            "Admin Dashboard",
            "Responsive Design",
            "Payment Integration",
            "Inventory Management",
            "Email Notifications",
        ],
        image: "/images/projects/ecommerce.jpg",
        screenshots: &[
            Screenshot {
                title: "Public Homepage",
                description: "Landing page with featured products and promotions",
                image: "/images/screenshots/ecom-homepage.jpg",
            },
            Screenshot {
                title: "User Dashboard",
                description: "Customer dashboard with order history and account settings",
                image: "/images/screenshots/ecom-user-dashboard.jpg",
            },
            Screenshot {
                title: "Admin Dashboard",
                description: "Product, order, and customer management for staff",
                image: "/images/screenshots/ecom-admin-dashboard.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: true,
        category: "Web Application",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "The platform handles the full commerce lifecycle: catalog browsing, cart and checkout, payment capture, and post-purchase order tracking. Admins get a dedicated dashboard with inventory controls and sales reporting.",
            ),
            ProjectSection::with_code(
                "Authentication System",
                "Registration, login, and password reset are built on Laravel's guard system, with role middleware separating customers from staff.",
                "php",
                "Route::middleware(['auth', 'role:admin'])->group(function () {\n    Route::resource('products', ProductController::class);\n    Route::resource('orders', OrderController::class);\n});",
            ),
            ProjectSection::text(
                "Shopping Cart Implementation",
                "The cart survives across sessions for logged-in users and merges a guest cart on login. Stock is validated again at checkout so concurrent purchases cannot oversell.",
            ),
        ],
        challenges: &[
            "Keeping cart state consistent between guest and authenticated sessions",
            "Preventing overselling under concurrent checkouts",
            "Designing an admin UI non-technical staff could operate",
        ],
        solutions: &[
            "Merged guest carts into account carts at login with conflict resolution",
            "Re-validated stock inside the checkout transaction",
            "Iterated the dashboard layout with the client's staff directly",
        ],
    },
    Project {
        slug: "university-thesis-repository",
        title: "University Repository Management System",
        description: "A thesis lifecycle platform with supervisor assignment, multi-role access control, PDF annotation, and university API integration.",
        long_description: "Built for a university department, this system manages the complete thesis lifecycle: proposal submission, supervisor matching, review rounds with inline PDF annotation, and final archival. Four distinct roles (student, supervisor, coordinator, admin) see tailored dashboards.",
        tech: &["Laravel", "Vue.js", "MySQL", "Tailwind CSS", "REST API"],
        features: &[
            "Supervisor Assignment",
            "Multi-Role Access Control",
            "PDF Annotation Studio",
            "University API Integration",
            "Thesis Lifecycle Management",
            "Review Workflows",
        ],
        image: "/images/projects/thesis.jpg",
        screenshots: &[
            Screenshot {
                title: "Student Portal",
                description: "Submission status and supervisor feedback at a glance",
                image: "/images/screenshots/thesis-student-portal.jpg",
            },
            Screenshot {
                title: "Supervisor Dashboard",
                description: "Queue of assigned theses with annotation shortcuts",
                image: "/images/screenshots/thesis-supervisor-dashboard.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: true,
        category: "Full-Stack Application",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "The repository digitizes a previously paper-based thesis process end to end, from proposal to archived publication, with full audit history of every review round.",
            ),
            ProjectSection::text(
                "Intelligent Supervisor Assignment",
                "Supervisors are suggested by matching thesis keywords against supervisor expertise profiles and balancing current workload, with coordinators able to override any suggestion.",
            ),
            ProjectSection::text(
                "Multi-Role Access Control",
                "A single permission layer drives four role-specific dashboards. Policies gate every state transition so a thesis can only move forward through the defined workflow.",
            ),
        ],
        challenges: &[
            "Modeling a strict review workflow without dead-end states",
            "Annotating large PDFs in the browser without plugins",
            "Syncing student records from a slow university API",
        ],
        solutions: &[
            "Expressed the workflow as explicit state transitions guarded by policies",
            "Rendered PDFs to canvas and stored annotations as overlay coordinates",
            "Cached the university API behind a nightly sync job",
        ],
    },
    Project {
        slug: "restaurant-management-system",
        title: "Smart Restaurant Management System",
        description: "Restaurant operations platform with QR table ordering, kitchen order tickets, reservations, and a multi-language customer portal.",
        long_description: "A complete restaurant suite: customers order from QR codes at the table, the kitchen works from a live ticket queue, and managers control menus, tables, and staff from an admin panel. The customer portal ships in multiple languages including full RTL support.",
        tech: &["Laravel", "Vue.js", "MySQL", "WebSockets", "Tailwind CSS"],
        features: &[
            "QR Code Table Ordering",
            "Kitchen Order Tickets",
            "Reservations",
            "Multi-Language & RTL",
            "Role-Based Access Control",
            "Menu Management",
        ],
        image: "/images/projects/restaurant.jpg",
        screenshots: &[
            Screenshot {
                title: "Digital Menu",
                description: "Customer-facing menu reached from a table QR code",
                image: "/images/screenshots/resto-menu.jpg",
            },
            Screenshot {
                title: "Reservation Flow",
                description: "Table picker with availability by time slot",
                image: "/images/screenshots/resto-reservation.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: true,
        category: "Full-Stack Application",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "Orders placed at the table flow straight to the kitchen display; staff never re-key anything. The same order model powers dine-in, takeaway, and reservations.",
            ),
            ProjectSection::text(
                "Kitchen Order Ticket (KOT) System",
                "Tickets stream to kitchen screens over WebSockets grouped by station, with preparation timers and bump/recall controls.",
            ),
            ProjectSection::text(
                "Multi-Language & RTL Support",
                "Every customer-facing string is translatable and layouts mirror correctly for RTL locales, verified against Arabic and Hebrew menus.",
            ),
        ],
        challenges: &[
            "Delivering kitchen tickets with sub-second latency",
            "Mirroring complex layouts for RTL locales",
            "Keeping menu edits live without breaking open orders",
        ],
        solutions: &[
            "Pushed tickets over WebSockets with a polling fallback",
            "Audited every component against RTL snapshots",
            "Versioned menu items so open orders pin the version they were placed with",
        ],
    },
    Project {
        slug: "company-website-cms",
        title: "Company Website CMS",
        description: "A custom content management system with a drag-and-drop page builder and built-in SEO tooling.",
        long_description: "A bespoke CMS that lets a marketing team compose pages from reusable blocks, preview drafts, and publish on schedule, with per-page SEO metadata and sitemap generation handled automatically.",
        tech: &["Laravel", "Alpine.js", "MySQL", "Tailwind CSS"],
        features: &[
            "Drag-and-Drop Page Builder",
            "SEO Management",
            "Draft Preview",
            "Scheduled Publishing",
            "Media Library",
        ],
        image: "/images/projects/company.jpg",
        screenshots: &[
            Screenshot {
                title: "Homepage",
                description: "Block-composed marketing homepage",
                image: "/images/screenshots/cms-homepage.jpg",
            },
            Screenshot {
                title: "Page Builder",
                description: "Reordering content blocks with live preview",
                image: "/images/screenshots/cms-page-builder.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: false,
        category: "CMS",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "The CMS replaces a static site the client could not edit. Non-technical editors now own the whole site through the block-based builder.",
            ),
            ProjectSection::text(
                "Page Builder",
                "Pages are ordered lists of typed blocks (hero, grid, testimonial, CTA). Blocks validate their own fields, so editors cannot publish a broken layout.",
            ),
            ProjectSection::text(
                "SEO Management",
                "Each page carries meta title, description, and social card fields; sitemaps and canonical tags regenerate on publish.",
            ),
        ],
        challenges: &[
            "Making the builder safe for non-technical editors",
            "Rendering builder output identically in preview and production",
        ],
        solutions: &[
            "Typed block schemas with server-side validation",
            "Shared one rendering pipeline between preview and publish",
        ],
    },
    Project {
        slug: "business-landing-pages",
        title: "Business Landing Pages",
        description: "A set of high-converting, performance-focused landing pages for small businesses.",
        long_description: "A collection of hand-tuned landing pages built for speed: minimal JavaScript, responsive images, and careful attention to Core Web Vitals, each tailored to a client's brand.",
        tech: &["HTML", "Tailwind CSS", "JavaScript", "Vite"],
        features: &[
            "Performance Optimization",
            "Responsive Design",
            "Conversion-Focused Layout",
            "Analytics Integration",
        ],
        image: "/images/projects/landing.jpg",
        screenshots: &[Screenshot {
            title: "Hero Section",
            description: "Above-the-fold layout with a single clear call to action",
            image: "/images/screenshots/landing-hero.jpg",
        }],
        demo: "#",
        github: "#",
        featured: false,
        category: "Frontend",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "Each page is built around one conversion goal. Copy, layout, and load time are all tuned toward that single action.",
            ),
            ProjectSection::text(
                "Performance Optimization",
                "Pages ship almost no JavaScript, use modern image formats with responsive srcsets, and stay comfortably inside Core Web Vitals thresholds on mid-range phones.",
            ),
        ],
        challenges: &[
            "Hitting sub-second loads on slow connections",
            "Keeping distinct brand identities on a shared codebase",
        ],
        solutions: &[
            "Inlined critical CSS and deferred everything non-essential",
            "Tokenized the design system per client",
        ],
    },
    Project {
        slug: "client-portfolio-websites",
        title: "Client Portfolio Websites",
        description: "Custom portfolio sites for creatives featuring galleries, lightboxes, and scroll-triggered animations.",
        long_description: "Portfolio sites designed around each client's work: filterable galleries, an accessible lightbox, and reveal animations driven by the Intersection Observer API for smooth, cheap scroll effects.",
        tech: &["JavaScript", "Tailwind CSS", "Vite"],
        features: &[
            "Filterable Galleries",
            "Accessible Lightbox",
            "Scroll-Triggered Animations",
            "Keyboard Navigation",
        ],
        image: "/images/projects/business.jpg",
        screenshots: &[
            Screenshot {
                title: "Gallery Grid",
                description: "Masonry grid with category filters",
                image: "/images/screenshots/portfolio-grid.jpg",
            },
            Screenshot {
                title: "Detail View",
                description: "Lightbox with captions and keyboard controls",
                image: "/images/screenshots/portfolio-detail.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: false,
        category: "Portfolio",
        sections: &[
            ProjectSection::with_code(
                "Lightbox Gallery",
                "The lightbox is a small dependency-free class handling open/close, captions, and scroll locking.",
                "javascript",
                "open(index) {\n  this.currentIndex = index;\n  this.overlay.classList.add('active');\n  this.updateImage();\n  document.body.style.overflow = 'hidden';\n}",
            ),
            ProjectSection::text(
                "Animation System",
                "Scroll-triggered reveals use the Intersection Observer API so animations cost nothing until an element actually approaches the viewport.",
            ),
        ],
        challenges: &[
            "Balancing visual richness with performance",
            "Implementing accessible image galleries",
        ],
        solutions: &[
            "Used modern image formats and responsive images",
            "Implemented ARIA labels and keyboard navigation",
        ],
    },
    Project {
        slug: "school-management-system",
        title: "School Management System",
        description: "A comprehensive school administration platform with student portals, attendance tracking, grade management, and parent communication.",
        long_description: "A full school administration suite covering enrollment, attendance, grading, scheduling, fees, and communication, with dedicated portals for administrators, teachers, students, and parents.",
        tech: &["Laravel", "Vue.js", "MySQL", "Tailwind CSS", "Chart.js"],
        features: &[
            "Student Information System",
            "Attendance Management",
            "Grade & Report Cards",
            "Class Scheduling",
            "Fee Management",
            "Parent Portal",
            "SMS/Email Notifications",
            "Role-Based Access Control",
        ],
        image: "/images/projects/school.jpg",
        screenshots: &[
            Screenshot {
                title: "Admin Dashboard",
                description: "Overview of school statistics and quick actions",
                image: "/images/screenshots/school-admin-dashboard.jpg",
            },
            Screenshot {
                title: "Student Portal",
                description: "Grades, attendance, and assignments for students",
                image: "/images/screenshots/school-student-portal.jpg",
            },
            Screenshot {
                title: "Teacher Dashboard",
                description: "Class management and grade entry",
                image: "/images/screenshots/school-teacher-dashboard.jpg",
            },
            Screenshot {
                title: "Parent Portal",
                description: "Student progress and fee status for parents",
                image: "/images/screenshots/school-parent-portal.jpg",
            },
        ],
        demo: "#",
        github: "#",
        featured: false,
        category: "Web Application",
        sections: &[
            ProjectSection::text(
                "Project Overview",
                "Every administrative and academic process of the school runs through role-specific dashboards backed by a single normalized data model.",
            ),
            ProjectSection::with_code(
                "Student Management",
                "Enrollment wraps admission number generation and academic record creation in one transaction.",
                "php",
                "public function enroll(array $data): Student\n{\n    return DB::transaction(function () use ($data) {\n        $student = Student::create([\n            'admission_no' => $this->generateAdmissionNumber(),\n            'name' => $data['name'],\n            'class_id' => $data['class_id'],\n        ]);\n        $student->academicRecords()->create([\n            'academic_year_id' => AcademicYear::current()->id,\n            'status' => 'active',\n        ]);\n        return $student;\n    });\n}",
            ),
            ProjectSection::text(
                "Attendance System",
                "Daily and period-wise attendance with absence notifications to parents and visual reports for coordinators.",
            ),
            ProjectSection::text(
                "Grade Management",
                "A configurable grading rules engine supports multiple assessment types and generates printable report cards.",
            ),
        ],
        challenges: &[
            "Managing complex relationships between students, classes, and subjects",
            "Implementing flexible grading systems for different standards",
            "Ensuring real-time parent notifications for attendance and grades",
        ],
        solutions: &[
            "Designed a normalized schema with strict foreign key relationships",
            "Built a configurable grading rules engine with weighted calculations",
            "Integrated SMS and email notifications with queue processing",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_project_hit_and_miss() {
        let p = get_project("laravel-ecommerce-platform").expect("known slug");
        assert_eq!(p.title, "Laravel E-commerce Platform");
        assert!(get_project("does-not-exist").is_none());
        assert!(get_project("").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = PROJECTS.iter().map(|p| p.slug).collect();
        slugs.sort();
        let len = slugs.len();
        slugs.dedup();
        assert_eq!(slugs.len(), len);
    }

    #[test]
    fn test_featured_projects() {
        let featured: Vec<_> = featured_projects().collect();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_related_projects_excludes_self_and_caps() {
        let related = related_projects("school-management-system", "Web Application", 3);
        assert!(related.len() <= 3);
        assert!(related.iter().all(|p| p.slug != "school-management-system"));
        assert!(related.iter().all(|p| p.category == "Web Application"));
    }

    #[test]
    fn test_categories_are_distinct() {
        let cats = categories();
        let mut sorted = cats.clone();
        sorted.sort();
        let len = sorted.len();
        sorted.dedup();
        assert_eq!(sorted.len(), len);
        assert!(cats.contains(&"Web Application"));
    }
}
