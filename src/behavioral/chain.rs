//! Chain of Responsibility: each handler either handles a request or passes
//! it to its successor.
//!
//! Handlers own their successor, so a chain is built tail first. `link`
//! does that from a front-to-back list.

use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Basic,
    Intermediate,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    priority: Priority,
}

impl Request {
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

pub trait SupportHandler {
    fn set_next(&mut self, next: Box<dyn SupportHandler>);
    fn next(&self) -> Option<&dyn SupportHandler>;
    fn level(&self) -> u8;
    fn can_handle(&self, request: &Request) -> bool;

    /// Returns `true` when some handler in the chain took the request.
    /// A request nobody handles falls off the end silently.
    fn handle_request(&self, request: &Request, out: &mut dyn Write) -> Result<bool> {
        if self.can_handle(request) {
            writeln!(out, "Level {} Support handled the request.", self.level())?;
            return Ok(true);
        }
        match self.next() {
            Some(next) => {
                tracing::debug!(
                    from = self.level(),
                    to = next.level(),
                    priority = ?request.priority(),
                    "Forwarding support request"
                );
                next.handle_request(request, out)
            }
            None => Ok(false),
        }
    }
}

/// One support tier that handles exactly one priority.
pub struct LevelSupportHandler {
    level: u8,
    handles: Priority,
    next: Option<Box<dyn SupportHandler>>,
}

impl LevelSupportHandler {
    pub fn level1() -> Self {
        Self::new(1, Priority::Basic)
    }

    pub fn level2() -> Self {
        Self::new(2, Priority::Intermediate)
    }

    pub fn level3() -> Self {
        Self::new(3, Priority::Critical)
    }

    fn new(level: u8, handles: Priority) -> Self {
        Self {
            level,
            handles,
            next: None,
        }
    }
}

impl SupportHandler for LevelSupportHandler {
    fn set_next(&mut self, next: Box<dyn SupportHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn SupportHandler> {
        self.next.as_deref()
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.priority() == self.handles
    }
}

/// Links `handlers` in order and returns the head of the chain.
pub fn link(handlers: Vec<Box<dyn SupportHandler>>) -> Option<Box<dyn SupportHandler>> {
    handlers.into_iter().rev().fold(None, |tail, mut handler| {
        if let Some(tail) = tail {
            handler.set_next(tail);
        }
        Some(handler)
    })
}

// ============================================================================
// Variant: authentication methods
// ============================================================================

pub trait AuthenticationHandler {
    fn set_next(&mut self, next: Box<dyn AuthenticationHandler>);
    fn next(&self) -> Option<&dyn AuthenticationHandler>;
    /// The request string this handler accepts and the line it prints.
    fn accepts(&self) -> (&'static str, &'static str);

    fn handle_request(&self, request: &str, out: &mut dyn Write) -> Result<bool> {
        let (method, message) = self.accepts();
        if request == method {
            writeln!(out, "{message}")?;
            return Ok(true);
        }
        match self.next() {
            Some(next) => next.handle_request(request, out),
            None => {
                writeln!(out, "Invalid authentication method.")?;
                Ok(false)
            }
        }
    }
}

#[derive(Default)]
pub struct UsernamePasswordHandler {
    next: Option<Box<dyn AuthenticationHandler>>,
}

impl AuthenticationHandler for UsernamePasswordHandler {
    fn set_next(&mut self, next: Box<dyn AuthenticationHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn AuthenticationHandler> {
        self.next.as_deref()
    }

    fn accepts(&self) -> (&'static str, &'static str) {
        (
            "username_password",
            "Authenticated using username and password.",
        )
    }
}

#[derive(Default)]
pub struct OAuthHandler {
    next: Option<Box<dyn AuthenticationHandler>>,
}

impl AuthenticationHandler for OAuthHandler {
    fn set_next(&mut self, next: Box<dyn AuthenticationHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn AuthenticationHandler> {
        self.next.as_deref()
    }

    fn accepts(&self) -> (&'static str, &'static str) {
        ("oauth_token", "Authenticated using OAuth token.")
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let handlers: Vec<Box<dyn SupportHandler>> = vec![
        Box::new(LevelSupportHandler::level1()),
        Box::new(LevelSupportHandler::level2()),
        Box::new(LevelSupportHandler::level3()),
    ];
    if let Some(support) = link(handlers) {
        for priority in [Priority::Basic, Priority::Intermediate, Priority::Critical] {
            support.handle_request(&Request::new(priority), out)?;
        }
    }

    writeln!(out)?;
    let mut auth = UsernamePasswordHandler::default();
    auth.set_next(Box::new(OAuthHandler::default()));
    for request in ["oauth_token", "username_password", "invalid_method"] {
        auth.handle_request(request, out)?;
    }
    Ok(())
}
