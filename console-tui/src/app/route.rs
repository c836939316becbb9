use std::fmt;

/// A screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Tenants,
    Users,
    Templates,
    Invoices,
    Messages,
    AuditLogs,
    Observability,
    Settings,
    SupportTools,
}

impl Route {
    /// Sidebar entries, top to bottom.
    pub const NAV: [Route; 10] = [
        Route::Dashboard,
        Route::Tenants,
        Route::Users,
        Route::Templates,
        Route::Invoices,
        Route::Messages,
        Route::AuditLogs,
        Route::Observability,
        Route::Settings,
        Route::SupportTools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Tenants => "Tenants",
            Route::Users => "Users & Roles",
            Route::Templates => "Templates",
            Route::Invoices => "Invoices",
            Route::Messages => "Messages",
            Route::AuditLogs => "Audit Logs",
            Route::Observability => "Observability",
            Route::Settings => "Settings",
            Route::SupportTools => "Support Tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Login => "◆",
            Route::Dashboard => "▦",
            Route::Tenants => "▣",
            Route::Users => "◎",
            Route::Templates => "◈",
            Route::Invoices => "▤",
            Route::Messages => "✉",
            Route::AuditLogs => "☰",
            Route::Observability => "∿",
            Route::Settings => "⚙",
            Route::SupportTools => "✎",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Tenants => "/tenants",
            Route::Users => "/users",
            Route::Templates => "/templates",
            Route::Invoices => "/invoices",
            Route::Messages => "/messages",
            Route::AuditLogs => "/audit",
            Route::Observability => "/observability",
            Route::Settings => "/settings",
            Route::SupportTools => "/support-tools",
        }
    }

    /// Neighbouring sidebar entry, wrapping. Login maps to the dashboard.
    pub fn step(self, forward: bool) -> Route {
        let len = Self::NAV.len();
        match Self::NAV.iter().position(|r| *r == self) {
            Some(i) if forward => Self::NAV[(i + 1) % len],
            Some(i) => Self::NAV[(i + len - 1) % len],
            None => Route::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
