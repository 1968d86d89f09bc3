use crate::app::types::Item;

/// Receiver of the "explore" action.
///
/// Failures to reach the target are the implementor's concern; the caller
/// expects nothing back.
pub trait Navigator {
    fn navigate_to_detail(&mut self, item: &Item);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Dashboard,
    Place(Item),
}

static DASHBOARD: Route = Route::Dashboard;

/// Route stack rooted at the dashboard.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Router {
            stack: vec![Route::Dashboard],
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&DASHBOARD)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self.current(), Route::Dashboard)
    }

    /// Pop one route. Returns `false` when already at the dashboard.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        tracing::info!(depth = self.stack.len(), "navigated back");
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for Router {
    fn navigate_to_detail(&mut self, item: &Item) {
        tracing::info!(place = %item.name, id = item.id, "opening place detail");
        self.stack.push(Route::Place(item.clone()));
    }
}
