use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Write the shopping list as `name,quantity,category` rows.
pub fn write_shopping_list_csv(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "quantity", "category"])?;
    for item in &plan.shopping_list {
        wtr.write_record([
            item.name.as_str(),
            item.quantity.as_str(),
            item.category_or_default(),
        ])?;
    }

    wtr.flush()?;
    tracing::debug!(path = %path.display(), rows = plan.shopping_list.len(), "Exported shopping list");
    Ok(())
}
