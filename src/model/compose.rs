//! Pure composition of fetched collections into view-ready groupings

use std::collections::HashMap;

use crate::model::{livestock::LivestockSummaryDto, tank::TankDto};

/// Group tanks under their owning aquarium's id
///
/// Tanks keep their fetched order within each group. Aquariums with no
/// tanks simply have no entry, callers render those as empty.
pub fn tanks_by_aquarium(tanks: &[TankDto]) -> HashMap<i32, Vec<TankDto>> {
    let mut groups: HashMap<i32, Vec<TankDto>> = HashMap::new();

    for tank in tanks {
        groups.entry(tank.aquarium_id).or_default().push(tank.clone());
    }

    groups
}

/// Total livestock headcount per tank id
pub fn livestock_totals(rows: &[LivestockSummaryDto]) -> HashMap<i32, i64> {
    let mut totals: HashMap<i32, i64> = HashMap::new();

    for row in rows {
        *totals.entry(row.tank_id).or_insert(0) += i64::from(row.quantity);
    }

    totals
}
