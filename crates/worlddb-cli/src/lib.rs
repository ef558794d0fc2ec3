//! worlddb-cli
//! ===========
//!
//! Command-line interface for the `worlddb-core` loading pipeline.
//!
//! This crate primarily provides a binary (`worlddb`). The library target
//! only exists so the crate gets a rendered documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! worlddb --help
//! worlddb sample-config > worlddb.toml
//! worlddb init-schema
//! worlddb inspect --data-dir ./data
//! worlddb load --data-dir ./data
//! ```
//!
//! For programmatic access use the `worlddb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
