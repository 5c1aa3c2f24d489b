use crate::model::Bus;

/// Case-insensitive substring match on bus number or type.
pub fn matches(bus: &Bus, query_lower: &str) -> bool {
    query_lower.is_empty()
        || bus.info.bus_number.to_lowercase().contains(query_lower)
        || bus.info.bus_type.as_str().to_lowercase().contains(query_lower)
}

/// The rendered subset of `buses` for `query`, in list order.
///
/// Borrowing keeps the canonical list untouched; callers recompute this on
/// every keystroke.
pub fn filter_buses<'a>(buses: &'a [Bus], query: &str) -> Vec<&'a Bus> {
    let q = query.to_lowercase();
    buses.iter().filter(|b| matches(b, &q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BusDraft, BusType};

    fn mk_bus(id: i64, number: &str, bus_type: BusType) -> Bus {
        Bus::new(
            id,
            BusDraft { bus_number: number.to_string(), bus_type, ..BusDraft::default() },
        )
    }

    #[test]
    fn search_matches_number_or_type() {
        let buses = vec![
            mk_bus(1, "KA-01-1234", BusType::Express),
            mk_bus(2, "MH-12-9000", BusType::Sleeper),
            mk_bus(3, "DL-3C-0042", BusType::Deluxe),
        ];
        let hits: Vec<i64> = filter_buses(&buses, "sLeEp").iter().map(|b| b.id).collect();
        assert_eq!(hits, vec![2]);

        let hits: Vec<i64> = filter_buses(&buses, "ka-01").iter().map(|b| b.id).collect();
        assert_eq!(hits, vec![1]);

        // "x" hits "Express" and "Deluxe" but no bus number
        let hits: Vec<i64> = filter_buses(&buses, "x").iter().map(|b| b.id).collect();
        assert_eq!(hits, vec![1, 3]);
    }

    #[test]
    fn empty_query_shows_everything() {
        let buses = vec![mk_bus(1, "A", BusType::Express), mk_bus(2, "B", BusType::Deluxe)];
        assert_eq!(filter_buses(&buses, "").len(), 2);
        assert!(filter_buses(&buses, "nothing-like-this").is_empty());
    }
}
