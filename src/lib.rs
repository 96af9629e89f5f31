//! # dmp-site
//!
//! Content tooling for the Decision Model Package (DMP) documentation site.
//!
//! The site shows two lists: an index of example packages built from their
//! `decision_card.md` files, and a browsable registry of published
//! packages. This crate produces the first and filters the second.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────┐
//! │ connector_fs │──▶│ frontmatter  │──▶│    catalog    │──▶ examples JSON
//! │  (discover)  │   │  + summary   │   │ (derive+sort) │
//! └──────────────┘   └──────────────┘   └───────────────┘
//!
//! ┌──────────────┐   ┌──────────────┐
//! │   packages   │──▶│    filter    │──▶ matching packages
//! │  (registry)  │   │ search+facet │
//! └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! dmp-site build --output public/dmp-examples.json
//! dmp-site packages routing --backend OR-Tools
//! dmp-site package tsp-ortools-basic
//! dmp-site validate path/to/my-dmp
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`connector_fs`] | Decision card discovery |
//! | [`frontmatter`] | Restricted frontmatter parser |
//! | [`summary`] | First-paragraph extraction |
//! | [`catalog`] | Example catalog construction |
//! | [`export`] | Catalog JSON export |
//! | [`packages`] | Package registry fixture |
//! | [`filter`] | Search and facet filtering |
//! | [`validate`] | DMP package validation |

pub mod catalog;
pub mod config;
pub mod connector_fs;
pub mod export;
pub mod filter;
pub mod format;
pub mod frontmatter;
pub mod get;
pub mod models;
pub mod packages;
pub mod search;
pub mod stats;
pub mod summary;
pub mod validate;
