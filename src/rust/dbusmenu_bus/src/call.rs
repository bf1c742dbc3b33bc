use std::fmt;

/// One of the remote methods issued during a benchmark pass.
///
/// Variants are declared in the order a pass issues them, so ordered
/// collections keyed by `MenuCall` iterate in call order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuCall {
    /// `GetLayout(parent_id)`
    GetLayout,
    /// `GetChildren(id, property_names)`
    GetChildren,
    /// `GetProperties(id, property_names)`
    GetProperties,
}

impl MenuCall {
    /// Every call, in pass order.
    pub const ALL: [MenuCall; 3] = [
        MenuCall::GetLayout,
        MenuCall::GetChildren,
        MenuCall::GetProperties,
    ];

    /// The D-Bus member name of the call.
    pub fn method_name(&self) -> &'static str {
        match self {
            MenuCall::GetLayout => "GetLayout",
            MenuCall::GetChildren => "GetChildren",
            MenuCall::GetProperties => "GetProperties",
        }
    }
}

impl fmt::Display for MenuCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn calls_sort_in_pass_order() {
        let mut calls = vec![MenuCall::GetProperties, MenuCall::GetLayout, MenuCall::GetChildren];
        calls.sort();
        assert_eq!(calls, MenuCall::ALL.to_vec());
    }

    #[test]
    fn display_is_member_name() {
        assert_eq!(MenuCall::GetChildren.to_string(), "GetChildren");
    }
}
