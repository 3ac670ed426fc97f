use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Project {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Category,
    Technologies,
    LiveUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum TeamMember {
    Table,
    Id,
    Name,
    Role,
    Bio,
    ImageUrl,
    LinkedinUrl,
    GithubUrl,
    TeamCategory,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Testimonial {
    Table,
    Id,
    Name,
    Role,
    Company,
    Content,
    ImageUrl,
    Rating,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    Category,
    Author,
    ImageUrl,
    ReadTime,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Career {
    Table,
    Id,
    Title,
    Department,
    Location,
    EmploymentType,
    Description,
    Requirements,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Benefit {
    Table,
    Id,
    Title,
    Description,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum CaseStudy {
    Table,
    Id,
    Title,
    Client,
    Industry,
    ImageUrl,
    Challenge,
    Solution,
    Testimonial,
    Tags,
    Results,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Documentation {
    Table,
    Id,
    Title,
    Category,
    Content,
    Icon,
    OrderIndex,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Faq {
    Table,
    Id,
    Question,
    Answer,
    Category,
    OrderIndex,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Service {
    Table,
    Id,
    Title,
    Description,
    Icon,
    OrderIndex,
    Published,
    CreatedAt,
    UpdatedAt,
}
