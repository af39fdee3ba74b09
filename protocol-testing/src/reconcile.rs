use std::{collections::HashMap, fmt};

use miette::{miette, IntoDiagnostic};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    client::{Row, SubgraphClient},
    config::Package,
};

/// Counters are `BigInt` strings on the index and integers in local snapshots.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(value) => Ok(value),
        Count::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

/// A relation: a bare id in snapshots, `{ id }` on the index.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Ref {
    Id(String),
    Object { id: String },
}

impl Ref {
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) | Ref::Object { id } => id,
        }
    }
}

fn is_non_zero(mantissa: &str) -> bool {
    !mantissa.is_empty() && mantissa != "0"
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRow {
    pub id: String,
    #[serde(alias = "supplier_count", deserialize_with = "count")]
    pub supplier_count: i64,
    #[serde(alias = "borrower_count", deserialize_with = "count")]
    pub borrower_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRow {
    pub id: String,
    pub market: Ref,
    #[serde(alias = "v_token_balance_mantissa")]
    pub v_token_balance_mantissa: String,
    #[serde(alias = "stored_borrow_balance_mantissa")]
    pub stored_borrow_balance_mantissa: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceRow {
    pub id: String,
    #[serde(alias = "total_delegates", deserialize_with = "count")]
    pub total_delegates: i64,
    #[serde(alias = "current_token_holders", deserialize_with = "count")]
    pub current_token_holders: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateRow {
    pub id: String,
    #[serde(alias = "total_votes_mantissa")]
    pub total_votes_mantissa: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolderRow {
    pub id: String,
    #[serde(alias = "balance_mantissa")]
    pub balance_mantissa: String,
}

macro_rules! row {
    ($($row:ty),* $(,)?) => {
        $(
            impl Row for $row {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

row!(MarketRow, PositionRow, GovernanceRow, DelegateRow, TokenHolderRow);

/// A counter that disagrees with the records it counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub entity: &'static str,
    pub id: String,
    pub field: &'static str,
    pub stored: i64,
    pub counted: i64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} is {} but {} records count",
            self.entity, self.id, self.field, self.stored, self.counted
        )
    }
}

fn check(out: &mut Vec<Mismatch>, entity: &'static str, id: &str, field: &'static str, stored: i64, counted: i64) {
    if stored != counted {
        out.push(Mismatch { entity, id: id.to_string(), field, stored, counted });
    }
}

/// Supplier and borrower counts against the non-zero positions of each market.
pub fn reconcile_markets(markets: &[MarketRow], positions: &[PositionRow]) -> Vec<Mismatch> {
    let mut suppliers: HashMap<&str, i64> = HashMap::new();
    let mut borrowers: HashMap<&str, i64> = HashMap::new();
    for position in positions {
        if is_non_zero(&position.v_token_balance_mantissa) {
            *suppliers.entry(position.market.id()).or_default() += 1;
        }
        if is_non_zero(&position.stored_borrow_balance_mantissa) {
            *borrowers.entry(position.market.id()).or_default() += 1;
        }
    }

    let mut mismatches = Vec::new();
    for market in markets {
        let id = market.id.as_str();
        let counted_suppliers = suppliers.get(id).copied().unwrap_or_default();
        let counted_borrowers = borrowers.get(id).copied().unwrap_or_default();
        check(&mut mismatches, "Market", id, "supplier_count", market.supplier_count, counted_suppliers);
        check(&mut mismatches, "Market", id, "borrower_count", market.borrower_count, counted_borrowers);
    }
    mismatches
}

/// Delegate and holder counts against the non-zero vote and token balances.
pub fn reconcile_governance(
    governance: &[GovernanceRow],
    delegates: &[DelegateRow],
    holders: &[TokenHolderRow],
) -> Vec<Mismatch> {
    let delegate_count = delegates
        .iter()
        .filter(|delegate| is_non_zero(&delegate.total_votes_mantissa))
        .count() as i64;
    let holder_count = holders
        .iter()
        .filter(|holder| is_non_zero(&holder.balance_mantissa))
        .count() as i64;

    let mut mismatches = Vec::new();
    for row in governance {
        check(&mut mismatches, "Governance", &row.id, "total_delegates", row.total_delegates, delegate_count);
        check(&mut mismatches, "Governance", &row.id, "current_token_holders", row.current_token_holders, holder_count);
    }
    mismatches
}

/// Rows of `entity` in a replay snapshot.
fn snapshot_rows<T: DeserializeOwned>(snapshot: &Value, entity: &str) -> miette::Result<Vec<T>> {
    match snapshot.get(entity) {
        Some(Value::Object(rows)) => rows
            .values()
            .map(|row| serde_json::from_value(row.clone()).into_diagnostic())
            .collect(),
        Some(_) => Err(miette!("snapshot entry '{}' is not an object", entity)),
        None => Ok(Vec::new()),
    }
}

/// Reconciles the counters of a local replay snapshot.
pub fn reconcile_snapshot(package: Package, snapshot: &Value) -> miette::Result<Vec<Mismatch>> {
    match package {
        Package::CorePool | Package::IsolatedPools => Ok(reconcile_markets(
            &snapshot_rows(snapshot, "Market")?,
            &snapshot_rows(snapshot, "AccountVToken")?,
        )),
        Package::Governance => Ok(reconcile_governance(
            &snapshot_rows(snapshot, "Governance")?,
            &snapshot_rows(snapshot, "Delegate")?,
            &snapshot_rows(snapshot, "TokenHolder")?,
        )),
        other => Err(miette!("{} has no counters to reconcile", other)),
    }
}

/// Reconciles the counters served by a live index.
pub async fn reconcile_remote(client: &SubgraphClient, package: Package) -> miette::Result<Vec<Mismatch>> {
    match package {
        Package::CorePool | Package::IsolatedPools => {
            let markets: Vec<MarketRow> = client
                .query_all("markets", "supplierCount borrowerCount")
                .await
                .into_diagnostic()?;
            let positions: Vec<PositionRow> = client
                .query_all("accountVTokens", "market { id } vTokenBalanceMantissa storedBorrowBalanceMantissa")
                .await
                .into_diagnostic()?;
            Ok(reconcile_markets(&markets, &positions))
        }
        Package::Governance => {
            let governance: Vec<GovernanceRow> = client
                .query_all("governances", "totalDelegates currentTokenHolders")
                .await
                .into_diagnostic()?;
            let delegates: Vec<DelegateRow> = client
                .query_all("delegates", "totalVotesMantissa")
                .await
                .into_diagnostic()?;
            let holders: Vec<TokenHolderRow> = client
                .query_all("tokenHolders", "balanceMantissa")
                .await
                .into_diagnostic()?;
            Ok(reconcile_governance(&governance, &delegates, &holders))
        }
        other => Err(miette!("{} has no counters to reconcile", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn position(id: &str, market: &str, supplied: &str, borrowed: &str) -> PositionRow {
        PositionRow {
            id: id.to_string(),
            market: Ref::Id(market.to_string()),
            v_token_balance_mantissa: supplied.to_string(),
            stored_borrow_balance_mantissa: borrowed.to_string(),
        }
    }

    #[test]
    fn test_markets_in_agreement() {
        let markets = vec![MarketRow { id: "0x0b".to_string(), supplier_count: 2, borrower_count: 1 }];
        let positions = vec![
            position("a", "0x0b", "50", "0"),
            position("b", "0x0b", "10", "7"),
            position("c", "0x0b", "0", "0"),
            position("d", "0x0c", "10", "7"),
        ];
        assert!(reconcile_markets(&markets, &positions).is_empty());
    }

    #[test]
    fn test_market_mismatch_is_reported() {
        let markets = vec![MarketRow { id: "0x0b".to_string(), supplier_count: 3, borrower_count: 0 }];
        let positions = vec![position("a", "0x0b", "50", "0")];

        let mismatches = reconcile_markets(&markets, &positions);
        assert_eq!(
            mismatches,
            vec![Mismatch { entity: "Market", id: "0x0b".to_string(), field: "supplier_count", stored: 3, counted: 1 }]
        );
        assert_eq!(mismatches[0].to_string(), "Market 0x0b: supplier_count is 3 but 1 records count");
    }

    #[test]
    fn test_rows_from_index_and_snapshot() {
        let remote: MarketRow =
            serde_json::from_value(json!({ "id": "0x0b", "supplierCount": "4", "borrowerCount": "1" })).unwrap();
        assert_eq!(remote.supplier_count, 4);

        let local: MarketRow =
            serde_json::from_value(json!({ "id": "0x0b", "supplier_count": 4, "borrower_count": 1, "name": "vUSDT" }))
                .unwrap();
        assert_eq!(local.borrower_count, 1);

        let remote: PositionRow = serde_json::from_value(json!({
            "id": "p",
            "market": { "id": "0x0b" },
            "vTokenBalanceMantissa": "1",
            "storedBorrowBalanceMantissa": "0",
        }))
        .unwrap();
        assert_eq!(remote.market.id(), "0x0b");
    }

    #[test]
    fn test_reconcile_governance_snapshot() {
        let snapshot = json!({
            "Governance": { "GOVERNANCE": { "id": "GOVERNANCE", "total_delegates": 1, "current_token_holders": 2 } },
            "Delegate": {
                "0x01": { "id": "0x01", "total_votes_mantissa": "100" },
                "0x02": { "id": "0x02", "total_votes_mantissa": "0" },
            },
            "TokenHolder": {
                "0x01": { "id": "0x01", "balance_mantissa": "5" },
                "0x02": { "id": "0x02", "balance_mantissa": "0" },
            },
        });

        let mismatches = reconcile_snapshot(Package::Governance, &snapshot).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, "current_token_holders");
        assert_eq!(mismatches[0].counted, 1);
    }

    #[test]
    fn test_packages_without_counters() {
        assert!(reconcile_snapshot(Package::CrossChainGovernance, &json!({})).is_err());
    }
}
