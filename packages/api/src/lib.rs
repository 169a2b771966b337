//! # API crate: REST client and client-side workflows for ExamHub
//!
//! Everything the UI needs to talk to the exam backend lives here: the records
//! that mirror its JSON, the HTTP client, profile-picture uploads, form
//! validation, the sign-in/sign-up/profile workflows and the list helpers the
//! screens use to search, sort and paginate fetched data.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: generic list/get/create/patch/replace/delete per [`Resource`] |
//! | [`models`] | `Account`, `Exam`, `Subject`, `Course`, `Question`, `UserAnswer`, `Comment` |
//! | [`storage`] | Object-storage uploads returning a public download URL |
//! | [`validate`] | Email/password/phone checks and per-field [`FormErrors`] |
//! | [`auth`] | Password hashing, sign-in, sign-up, profile and password changes |
//! | [`listing`] | Filtering, sorting, pagination and statistics over fetched lists |
//! | [`sample`] | Fallback records shown when the backend is unreachable |
//!
//! The backend owns scoring, persistence and authorization. This crate only
//! reads and writes whole records through REST calls.

pub mod auth;
pub mod client;
pub mod error;
pub mod listing;
pub mod models;
pub mod sample;
pub mod storage;
pub mod validate;

pub use auth::{AuthError, UserDirectory};
pub use client::{ApiClient, Resource};
pub use error::ApiError;
pub use models::{
    Account, AnswerRecord, Comment, Course, Exam, LockState, Question, Subject, UserAnswer,
};
pub use storage::ObjectStorage;
pub use validate::{Field, FormErrors};
