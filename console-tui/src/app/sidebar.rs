//! Left navigation column.

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::draw;
use console_widgets::theme::Theme;

use super::route::Route;

pub const EXPANDED_WIDTH: u16 = 24;
pub const COLLAPSED_WIDTH: u16 = 5;

const BRAND: &str = "BizGrow360";
/// Brand row plus the rule under it.
const HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    Route(Route),
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sidebar {
    pub collapsed: bool,
}

impl Sidebar {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn width(&self) -> u16 {
        if self.collapsed {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
        log::debug!("Sidebar collapsed: {}", self.collapsed);
    }

    fn item_rect(area: Rect, index: usize) -> Rect {
        Rect::new(area.x, area.y + HEADER_HEIGHT + index as u16, area.width, 1)
    }

    fn toggle_rect(area: Rect) -> Rect {
        Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1)
    }

    pub fn hit(&self, area: Rect, x: u16, y: u16) -> Option<SidebarHit> {
        if !area.contains(x, y) {
            return None;
        }
        if Self::toggle_rect(area).contains(x, y) {
            return Some(SidebarHit::Toggle);
        }
        Route::NAV
            .iter()
            .enumerate()
            .find(|(i, _)| Self::item_rect(area, *i).contains(x, y))
            .map(|(_, route)| SidebarHit::Route(*route))
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, active: Route, theme: &dyn Theme) {
        if area.is_empty() {
            return;
        }
        buf.fill(area, &Style::new().background(theme.color("surface")));

        let brand = if self.collapsed {
            " ◆".to_string()
        } else {
            format!(" ◆ {}", BRAND)
        };
        let (brand_row, rest) = area.split_top(1);
        draw::text(
            buf,
            brand_row,
            &brand,
            TextAlign::Left,
            Style::new().foreground(theme.color("primary")).bold(),
        );
        let (rule_row, _) = rest.split_top(1);
        draw::rule(buf, rule_row, Style::new().foreground(theme.color("border")));

        for (i, route) in Route::NAV.iter().enumerate() {
            let rect = Self::item_rect(area, i);
            if rect.bottom() >= area.bottom() {
                break;
            }
            let label = if self.collapsed {
                format!("  {}", route.icon())
            } else {
                format!("  {}  {}", route.icon(), route.label())
            };
            let style = if *route == active {
                buf.fill(rect, &Style::new().background(theme.color("cursor")));
                Style::new().foreground(theme.color("primary")).bold()
            } else {
                Style::new().foreground(theme.color("muted"))
            };
            draw::text(buf, rect, &label, TextAlign::Left, style);
        }

        let toggle = if self.collapsed { "  »" } else { "  « Collapse" };
        draw::text(
            buf,
            Self::toggle_rect(area),
            toggle,
            TextAlign::Left,
            Style::new().foreground(theme.color("muted")),
        );
    }
}
