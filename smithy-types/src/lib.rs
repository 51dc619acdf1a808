/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime types shared by generated model crates.
//!
//! Generated shapes store timestamps as [`Instant`], render themselves through
//! [`display::ShapeDisplay`], and insert map entries through [`map::insert_unique`], which
//! reports an existing key as a [`DuplicateKeyError`].

pub mod display;
pub mod error;
pub mod hash;
pub mod instant;
pub mod map;

pub use crate::error::DuplicateKeyError;
pub use crate::instant::Instant;
