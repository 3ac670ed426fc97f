use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::schema::{self, Schema};

/// Every admin-managed content table. The string form is the URL segment
/// used under `/admin/{collection}`.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Collection {
    #[serde(rename = "projects")]
    #[strum(serialize = "projects")]
    Projects,
    #[serde(rename = "team")]
    #[strum(serialize = "team")]
    TeamMembers,
    #[serde(rename = "testimonials")]
    #[strum(serialize = "testimonials")]
    Testimonials,
    #[serde(rename = "blog")]
    #[strum(serialize = "blog")]
    BlogPosts,
    #[serde(rename = "careers")]
    #[strum(serialize = "careers")]
    Careers,
    #[serde(rename = "benefits")]
    #[strum(serialize = "benefits")]
    Benefits,
    #[serde(rename = "case-studies")]
    #[strum(serialize = "case-studies")]
    CaseStudies,
    #[serde(rename = "documentation")]
    #[strum(serialize = "documentation")]
    Documentation,
    #[serde(rename = "faqs")]
    #[strum(serialize = "faqs")]
    Faqs,
    #[serde(rename = "services")]
    #[strum(serialize = "services")]
    Services,
}

impl Collection {
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::TeamMembers => "team",
            Collection::Testimonials => "testimonials",
            Collection::BlogPosts => "blog",
            Collection::Careers => "careers",
            Collection::Benefits => "benefits",
            Collection::CaseStudies => "case-studies",
            Collection::Documentation => "documentation",
            Collection::Faqs => "faqs",
            Collection::Services => "services",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Collection::Projects => "project",
            Collection::TeamMembers => "team_member",
            Collection::Testimonials => "testimonial",
            Collection::BlogPosts => "blog_post",
            Collection::Careers => "career",
            Collection::Benefits => "benefit",
            Collection::CaseStudies => "case_study",
            Collection::Documentation => "documentation",
            Collection::Faqs => "faq",
            Collection::Services => "service",
        }
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            Collection::Projects => &schema::PROJECTS,
            Collection::TeamMembers => &schema::TEAM_MEMBERS,
            Collection::Testimonials => &schema::TESTIMONIALS,
            Collection::BlogPosts => &schema::BLOG_POSTS,
            Collection::Careers => &schema::CAREERS,
            Collection::Benefits => &schema::BENEFITS,
            Collection::CaseStudies => &schema::CASE_STUDIES,
            Collection::Documentation => &schema::DOCUMENTATION,
            Collection::Faqs => &schema::FAQS,
            Collection::Services => &schema::SERVICES,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn slug_round_trips_through_from_str() {
        for collection in Collection::VARIANTS {
            assert_eq!(Collection::from_str(collection.slug()).ok(), Some(*collection));
            assert_eq!(collection.to_string(), collection.slug());
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!(Collection::from_str("recipes").is_err());
    }

    #[test]
    fn only_projects_and_team_lack_published_flag() {
        let without: Vec<_> = Collection::VARIANTS
            .iter()
            .filter(|c| !c.schema().has_published)
            .collect();

        assert_eq!(without, vec![&Collection::Projects, &Collection::TeamMembers]);
    }
}
