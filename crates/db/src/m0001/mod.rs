mod benefit;
mod blog_post;
mod career;
mod case_study;
mod documentation;
mod faq;
mod project;
mod service;
mod team_member;
mod testimonial;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "sequenceit",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        project::CreateTable,
        project::CreateIdx1,
        team_member::CreateTable,
        testimonial::CreateTable,
        testimonial::CreateIdx1,
        blog_post::CreateTable,
        blog_post::CreateIdx1,
        career::CreateTable,
        benefit::CreateTable,
        case_study::CreateTable,
        documentation::CreateTable,
        documentation::CreateIdx1,
        faq::CreateTable,
        faq::CreateIdx1,
        service::CreateTable
    ]
);
