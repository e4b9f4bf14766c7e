//! An outer record that embeds an inner one and exposes its members.
//!
//! Rust does not promote the fields and methods of an inner value to the
//! value that holds it. [`Admin`] holds a [`User`] and forwards to it by hand,
//! so `admin.notify(..)` and `admin.user().notify(..)` do the same thing.

use std::io::{self, Write};

use serde::Deserialize;

// ------------- User -------------
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    /// Writes the notification line for this user.
    pub fn notify<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, " Sending User Email to {}<{}>", self.name, self.email)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new("Joshua", "jaguilar20@gmail.com")
    }
}

// ------------- Admin -------------
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Admin {
    user: User,
    level: String,
}

impl Admin {
    pub fn new(user: User, level: impl Into<String>) -> Self {
        Self {
            user,
            level: level.into(),
        }
    }
    /// The explicit path to the inner value.
    pub fn user(&self) -> &User {
        &self.user
    }
    pub fn level(&self) -> &str {
        &self.level
    }
    // forwarded from the inner user
    pub fn name(&self) -> &str {
        self.user.name()
    }
    pub fn email(&self) -> &str {
        self.user.email()
    }
    pub fn notify<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.user.notify(out)
    }
}

impl Default for Admin {
    fn default() -> Self {
        Self::new(User::default(), "Super")
    }
}
