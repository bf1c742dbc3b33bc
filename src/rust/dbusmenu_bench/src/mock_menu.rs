//! In-memory `MenuService` and a hand-driven clock for tests.

use crate::Clock;
use dbusmenu_bus::{
    ChildEntry, LayoutResponse, MenuBusError, MenuCall, MenuService, PropertyBag, PropertyValue,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::{Duration, Instant},
};

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub struct MockMenu {
    revision: i64,
    layout: String,
    children: Vec<ChildEntry>,
    properties: PropertyBag,
    fail_on: Option<MenuCall>,
    latency: Option<(Rc<ManualClock>, [Duration; 3])>,
    calls: RefCell<Vec<(MenuCall, i32)>>,
    requested: RefCell<Vec<String>>,
}

impl MockMenu {
    /// Root 1 with a single "File" item, id 2.
    pub fn file_menu() -> Self {
        let mut child_properties = PropertyBag::new();
        child_properties.insert("label".to_string(), PropertyValue::from("File"));
        let mut properties = child_properties.clone();
        properties.insert("enabled".to_string(), PropertyValue::from(true));
        Self {
            revision: 7,
            layout: r#"<menu id="1"><menu id="2"/></menu>"#.to_string(),
            children: vec![ChildEntry {
                id: 2,
                properties: child_properties,
            }],
            properties,
            fail_on: None,
            latency: None,
            calls: RefCell::new(Vec::new()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_layout(mut self, layout: &str) -> Self {
        self.layout = layout.to_string();
        self
    }

    pub fn failing(mut self, call: MenuCall) -> Self {
        self.fail_on = Some(call);
        self
    }

    /// Each call moves `clock` forward by its latency, in
    /// GetLayout/GetChildren/GetProperties order.
    pub fn with_latencies(mut self, clock: Rc<ManualClock>, latencies: [Duration; 3]) -> Self {
        self.latency = Some((clock, latencies));
        self
    }

    pub fn calls(&self) -> Vec<(MenuCall, i32)> {
        self.calls.borrow().clone()
    }

    pub fn requested_properties(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    fn enter(&self, call: MenuCall, id: i32, names: &[&str]) -> Result<(), MenuBusError> {
        self.calls.borrow_mut().push((call, id));
        if let Some((clock, latencies)) = &self.latency {
            clock.advance(latencies[call as usize]);
        }
        if !names.is_empty() {
            *self.requested.borrow_mut() = names.iter().map(|n| n.to_string()).collect();
        }
        if self.fail_on == Some(call) {
            return Err(MenuBusError::RemoteCallError {
                call,
                source: zbus::Error::Failure("mock failure".to_string()),
            });
        }
        Ok(())
    }
}

impl MenuService for MockMenu {
    async fn get_layout(&self, parent_id: i32) -> Result<LayoutResponse, MenuBusError> {
        self.enter(MenuCall::GetLayout, parent_id, &[])?;
        Ok(LayoutResponse {
            revision: self.revision,
            layout: self.layout.clone(),
        })
    }

    async fn get_children(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<Vec<ChildEntry>, MenuBusError> {
        self.enter(MenuCall::GetChildren, id, property_names)?;
        Ok(self.children.clone())
    }

    async fn get_properties(
        &self,
        id: i32,
        property_names: &[&str],
    ) -> Result<PropertyBag, MenuBusError> {
        self.enter(MenuCall::GetProperties, id, property_names)?;
        Ok(self.properties.clone())
    }
}
