pub const PROJECT_CATEGORIES: &[&str] = &["Web Development", "AI & ML", "Blockchain", "Mobile", "Cloud"];

pub const TEAM_CATEGORIES: &[&str] = &[
    "Development",
    "AI & Data",
    "Blockchain",
    "Design",
    "Management",
];

pub const CAREER_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "AI & Machine Learning",
    "Blockchain",
    "Infrastructure",
    "Design",
    "Management",
];

pub const CAREER_LOCATIONS: &[&str] = &["Remote", "Hybrid", "On-site"];

pub const CAREER_TYPES: &[&str] = &["Full-time", "Part-time", "Contract"];

pub const DOCUMENTATION_CATEGORIES: &[&str] = &[
    "Getting Started",
    "Core Features",
    "Advanced Topics",
    "API Reference",
    "Best Practices",
    "Troubleshooting",
];

pub const FAQ_CATEGORIES: &[&str] = &[
    "General",
    "Pricing & Payment",
    "Technical",
    "Security & Privacy",
    "Process & Communication",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of text.
    Text,
    /// Multi-line text, rendered as a textarea.
    LongText,
    /// Optional absolute http(s) URL.
    Url,
    Integer,
    /// Integer constrained to 1..=5.
    Rating,
    /// One of a fixed set of options.
    Choice(&'static [&'static str]),
    /// Comma or newline separated values, stored as a JSON array.
    List,
    /// `metric|value|icon` lines, stored as a JSON array of objects.
    Results,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_len: Option<usize>,
    pub default: Option<&'static str>,
}

impl Field {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            max_len: None,
            default: None,
        }
    }

    const fn text(name: &'static str, label: &'static str, max_len: usize) -> Self {
        Self::new(name, label, FieldKind::Text).max(max_len)
    }

    const fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Url).max(2048)
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn max(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    const fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn is_long_text(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::LongText | FieldKind::List | FieldKind::Results
        )
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }

    /// Hint shown under the input for fields with a non-obvious format.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::List => Some("Separate values with commas or new lines"),
            FieldKind::Results => Some("One result per line: metric|value|icon"),
            FieldKind::Rating => Some("From 1 to 5"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Describes one content table: which columns it has, how they are
/// validated and how lists are ordered by default.
#[derive(Debug)]
pub struct Schema {
    pub label: &'static str,
    pub singular: &'static str,
    pub fields: &'static [Field],
    pub has_published: bool,
    pub order: &'static [(&'static str, Direction)],
    pub category: Option<&'static str>,
    pub search: &'static [&'static str],
    pub title: &'static str,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Columns selected for a record, in table order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["id"];
        columns.extend(self.fields.iter().map(|f| f.name));
        if self.has_published {
            columns.push("published");
        }
        columns.extend(["created_at", "updated_at"]);

        columns
    }
}

pub static PROJECTS: Schema = Schema {
    label: "Projects",
    singular: "Project",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new("description", "Description", FieldKind::LongText).max(5000),
        Field::url("image_url", "Image URL"),
        Field::new("category", "Category", FieldKind::Choice(PROJECT_CATEGORIES)),
        Field::new("technologies", "Technologies", FieldKind::List),
        Field::url("live_url", "Live URL"),
    ],
    has_published: false,
    order: &[("created_at", Direction::Desc)],
    category: Some("category"),
    search: &["title", "description", "technologies"],
    title: "title",
};

pub static TEAM_MEMBERS: Schema = Schema {
    label: "Team",
    singular: "Team member",
    fields: &[
        Field::text("name", "Name", 100).required(),
        Field::text("role", "Role", 100).required(),
        Field::new("bio", "Bio", FieldKind::LongText).max(2000),
        Field::url("image_url", "Image URL"),
        Field::url("linkedin_url", "LinkedIn URL"),
        Field::url("github_url", "GitHub URL"),
        Field::new("team_category", "Team", FieldKind::Choice(TEAM_CATEGORIES)),
    ],
    has_published: false,
    order: &[("created_at", Direction::Asc)],
    category: Some("team_category"),
    search: &["name", "role", "bio"],
    title: "name",
};

pub static TESTIMONIALS: Schema = Schema {
    label: "Testimonials",
    singular: "Testimonial",
    fields: &[
        Field::text("name", "Name", 100).required(),
        Field::text("role", "Role", 100).required(),
        Field::text("company", "Company", 100),
        Field::new("content", "Content", FieldKind::LongText)
            .required()
            .max(2000),
        Field::url("image_url", "Image URL"),
        Field::new("rating", "Rating", FieldKind::Rating).default("5"),
    ],
    has_published: true,
    order: &[("created_at", Direction::Desc)],
    category: None,
    search: &["name", "company", "content"],
    title: "name",
};

pub static BLOG_POSTS: Schema = Schema {
    label: "Blog",
    singular: "Blog post",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new("excerpt", "Excerpt", FieldKind::LongText).max(500),
        Field::new("content", "Content", FieldKind::LongText)
            .required()
            .max(50000),
        Field::text("category", "Category", 50),
        Field::text("author", "Author", 100),
        Field::url("image_url", "Image URL"),
        Field::new("read_time", "Read time (minutes)", FieldKind::Integer),
    ],
    has_published: true,
    order: &[("created_at", Direction::Desc)],
    category: Some("category"),
    search: &["title", "excerpt", "content"],
    title: "title",
};

pub static CAREERS: Schema = Schema {
    label: "Careers",
    singular: "Career",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new(
            "department",
            "Department",
            FieldKind::Choice(CAREER_DEPARTMENTS),
        ),
        Field::new("location", "Location", FieldKind::Choice(CAREER_LOCATIONS)),
        Field::new("employment_type", "Type", FieldKind::Choice(CAREER_TYPES)),
        Field::new("description", "Description", FieldKind::LongText)
            .required()
            .max(5000),
        Field::new("requirements", "Requirements", FieldKind::List),
    ],
    has_published: true,
    order: &[("created_at", Direction::Desc)],
    category: Some("department"),
    search: &["title", "description"],
    title: "title",
};

pub static BENEFITS: Schema = Schema {
    label: "Benefits",
    singular: "Benefit",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new("description", "Description", FieldKind::LongText)
            .required()
            .max(1000),
    ],
    has_published: true,
    order: &[("created_at", Direction::Asc)],
    category: None,
    search: &["title", "description"],
    title: "title",
};

pub static CASE_STUDIES: Schema = Schema {
    label: "Case studies",
    singular: "Case study",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::text("client", "Client", 100).required(),
        Field::text("industry", "Industry", 100),
        Field::url("image_url", "Image URL"),
        Field::new("challenge", "Challenge", FieldKind::LongText).max(5000),
        Field::new("solution", "Solution", FieldKind::LongText).max(5000),
        Field::new("testimonial", "Client testimonial", FieldKind::LongText).max(2000),
        Field::new("tags", "Tags", FieldKind::List),
        Field::new("results", "Results", FieldKind::Results),
    ],
    has_published: true,
    order: &[("created_at", Direction::Desc)],
    category: Some("industry"),
    search: &["title", "client", "industry"],
    title: "title",
};

pub static DOCUMENTATION: Schema = Schema {
    label: "Documentation",
    singular: "Document",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new(
            "category",
            "Category",
            FieldKind::Choice(DOCUMENTATION_CATEGORIES),
        ),
        Field::new("content", "Content", FieldKind::LongText)
            .required()
            .max(50000),
        Field::text("icon", "Icon", 50),
        Field::new("order_index", "Order", FieldKind::Integer).default("0"),
    ],
    has_published: true,
    order: &[("category", Direction::Asc), ("order_index", Direction::Asc)],
    category: Some("category"),
    search: &["title", "content"],
    title: "title",
};

pub static FAQS: Schema = Schema {
    label: "FAQs",
    singular: "FAQ",
    fields: &[
        Field::text("question", "Question", 500).required(),
        Field::new("answer", "Answer", FieldKind::LongText)
            .required()
            .max(5000),
        Field::new("category", "Category", FieldKind::Choice(FAQ_CATEGORIES)),
        Field::new("order_index", "Order", FieldKind::Integer).default("0"),
    ],
    has_published: true,
    order: &[("category", Direction::Asc), ("order_index", Direction::Asc)],
    category: Some("category"),
    search: &["question", "answer"],
    title: "question",
};

pub static SERVICES: Schema = Schema {
    label: "Services",
    singular: "Service",
    fields: &[
        Field::text("title", "Title", 150).required(),
        Field::new("description", "Description", FieldKind::LongText)
            .required()
            .max(2000),
        Field::text("icon", "Icon", 50),
        Field::new("order_index", "Order", FieldKind::Integer).default("0"),
    ],
    has_published: true,
    order: &[("order_index", Direction::Asc), ("created_at", Direction::Asc)],
    category: None,
    search: &["title", "description"],
    title: "title",
};
