//! Marketing content generation for musicians
//!
//! An [`orchestration::ArtistProfile`] goes in and a fixed-shape
//! [`orchestration::ContentBundle`] of branding, social media, press and
//! insight content comes out. The bundle comes from a remote chat-completion
//! model when a credential is supplied and the call succeeds, and from a
//! deterministic template generator otherwise.

pub mod orchestration;
pub mod render;
