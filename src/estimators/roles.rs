// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};

/// Function of one data dimension within an information query.
///
/// Dimensions sharing a role form one composite (multi-dimensional) variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `-1`: not part of the query.
    Ignored,
    /// `0`: the target variable (or `X` in two-variable queries).
    Target,
    /// `1`: the first source (or `Y` in two-variable queries).
    Source1,
    /// `2`: the second source, only meaningful for decomposition queries.
    Source2,
}

impl Role {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            -1 => Some(Role::Ignored),
            0 => Some(Role::Target),
            1 => Some(Role::Source1),
            2 => Some(Role::Source2),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Role::Ignored => -1,
            Role::Target => 0,
            Role::Source1 => 1,
            Role::Source2 => 2,
        }
    }
}

/// Role per dimension, validated against the data dimensionality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleVector(Vec<Role>);

impl RoleVector {
    /// Parse raw role ids (`-1`, `0`, `1`, `2`) for `dims`-dimensional data.
    pub fn parse(ids: &[i32], dims: usize) -> Result<Self> {
        if ids.len() != dims {
            return Err(Error::LengthMismatch {
                what: "role vector",
                expected: dims,
                got: ids.len(),
            });
        }
        ids.iter()
            .enumerate()
            .map(|(dim, &id)| Role::from_id(id).ok_or(Error::InvalidRole { dim, id }))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }

    /// Indices of the dimensions carrying `role`, in ascending order.
    pub fn dims_with(&self, role: Role) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == role)
            .map(|(d, _)| d)
            .collect()
    }

    /// Dimensions carrying any of `roles`, in ascending order.
    pub fn dims_with_any(&self, roles: &[Role]) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, r)| roles.contains(r))
            .map(|(d, _)| d)
            .collect()
    }
}
