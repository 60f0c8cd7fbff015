//! Topology resolution helpers.
//!
//! Point lookups and filters over already-fetched topology listings. The
//! controller has no by-id endpoint for tiers, nodes or business
//! transactions, so every lookup is a linear scan over a full listing.
//! "Not found" is a normal absent result, never an error.
//!
//! These helpers never fetch anything themselves; composition with network
//! calls happens in the [client facade](crate::client).

use crate::models::{BusinessTransaction, Node, Tier};

/// Finds the first tier whose `id` matches exactly.
#[must_use]
pub fn tier_by_id<'a>(tiers: &'a [Tier], id: &str) -> Option<&'a Tier> {
    tiers.iter().find(|tier| tier.id == id)
}

/// Finds the first node whose `id` matches exactly.
#[must_use]
pub fn node_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().find(|node| node.id == id)
}

/// Finds the first node whose `name` matches exactly.
#[must_use]
pub fn node_by_name<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Node> {
    nodes.iter().find(|node| node.name == name)
}

/// Finds the first business transaction whose `id` matches exactly.
#[must_use]
pub fn business_transaction_by_id<'a>(
    bts: &'a [BusinessTransaction],
    id: &str,
) -> Option<&'a BusinessTransaction> {
    bts.iter().find(|bt| bt.id == id)
}

/// Keeps only the nodes belonging to the named tier, order preserved.
#[must_use]
pub fn nodes_in_tier(nodes: Vec<Node>, tier_name: &str) -> Vec<Node> {
    nodes
        .into_iter()
        .filter(|node| node.tier_name == tier_name)
        .collect()
}

/// Keeps only the business transactions belonging to the named tier,
/// order preserved.
#[must_use]
pub fn business_transactions_in_tier(
    bts: Vec<BusinessTransaction>,
    tier_name: &str,
) -> Vec<BusinessTransaction> {
    bts.into_iter()
        .filter(|bt| bt.tier_name == tier_name)
        .collect()
}

/// Resolves the name of the tier owning the named business transaction.
///
/// Returns `None` when no business transaction matches; the caller decides
/// whether that is an error (a business-transaction metric path cannot be
/// built without a tier name).
#[must_use]
pub fn owning_tier<'a>(bts: &'a [BusinessTransaction], bt_name: &str) -> Option<&'a str> {
    bts.iter()
        .find(|bt| bt.name == bt_name)
        .map(|bt| bt.tier_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: &str, name: &str) -> Tier {
        Tier {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            agent_type: "APP_AGENT".to_string(),
            tier_type: "Application Server".to_string(),
            number_of_nodes: 1,
        }
    }

    fn node(id: &str, name: &str, tier_name: &str) -> Node {
        Node {
            id: id.to_string(),
            name: name.to_string(),
            node_type: "Application Server".to_string(),
            tier_id: "1".to_string(),
            tier_name: tier_name.to_string(),
            machine_id: "900".to_string(),
            machine_name: "web01".to_string(),
            machine_os_type: "Linux".to_string(),
            app_agent_present: true,
            app_agent_version: None,
            machine_agent_present: false,
            machine_agent_version: None,
            node_unique_local_id: String::new(),
        }
    }

    fn bt(id: &str, name: &str, tier_name: &str) -> BusinessTransaction {
        BusinessTransaction {
            id: id.to_string(),
            name: name.to_string(),
            internal_name: name.to_string(),
            background: false,
            entry_point_type: "SERVLET".to_string(),
            tier_id: "1".to_string(),
            tier_name: tier_name.to_string(),
        }
    }

    #[test]
    fn test_tier_by_id_finds_unique_match() {
        let tiers = vec![tier("1", "Web"), tier("2", "Inventory")];

        assert_eq!(tier_by_id(&tiers, "2").unwrap().name, "Inventory");
        assert_eq!(tier_by_id(&tiers, "3"), None);
    }

    #[test]
    fn test_tier_by_id_on_empty_listing() {
        assert_eq!(tier_by_id(&[], "1"), None);
    }

    #[test]
    fn test_node_lookups() {
        let nodes = vec![node("10", "web-1", "Web"), node("11", "inv-1", "Inventory")];

        assert_eq!(node_by_id(&nodes, "11").unwrap().name, "inv-1");
        assert_eq!(node_by_name(&nodes, "web-1").unwrap().id, "10");
        assert_eq!(node_by_name(&nodes, "missing"), None);
    }

    #[test]
    fn test_nodes_in_tier_preserves_order() {
        let nodes = vec![
            node("10", "web-1", "Web"),
            node("11", "inv-1", "Inventory"),
            node("12", "web-2", "Web"),
        ];

        let filtered = nodes_in_tier(nodes, "Web");

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "web-1");
        assert_eq!(filtered[1].name, "web-2");
    }

    #[test]
    fn test_business_transactions_in_tier() {
        let bts = vec![
            bt("20", "/checkout", "Web"),
            bt("21", "/restock", "Inventory"),
        ];

        let filtered = business_transactions_in_tier(bts, "Inventory");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "/restock");
    }

    #[test]
    fn test_owning_tier_first_match_and_absent() {
        let bts = vec![
            bt("20", "/checkout", "Web"),
            bt("21", "/restock", "Inventory"),
        ];

        assert_eq!(owning_tier(&bts, "/restock"), Some("Inventory"));
        assert_eq!(owning_tier(&bts, "/missing"), None);
    }
}
