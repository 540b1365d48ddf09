use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deliv_cli::views::{CompanyView, CourierView, RestaurantView};

pub fn print_company(view: &CompanyView) {
    section("Orders by day");
    let mut table = new_table(&["Date", "Orders"]);
    align_right(&mut table, &[1]);
    for row in &view.daily_orders {
        table.add_row(vec![
            Cell::new(row.date.format("%d-%m-%Y")),
            Cell::new(row.orders),
        ]);
    }
    println!("{table}");

    section("Orders by traffic condition");
    let mut table = new_table(&["Traffic", "Share"]);
    align_right(&mut table, &[1]);
    for row in &view.traffic_share {
        table.add_row(vec![
            Cell::new(&row.traffic),
            Cell::new(format!("{:.2}%", row.share * 100.0)),
        ]);
    }
    println!("{table}");

    section("Orders by city and traffic condition");
    let mut table = new_table(&["City", "Traffic", "Orders"]);
    align_right(&mut table, &[2]);
    for row in &view.city_traffic_orders {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(&row.traffic),
            Cell::new(row.orders),
        ]);
    }
    println!("{table}");

    section("Orders by week");
    let mut table = new_table(&["Week", "Orders"]);
    align_right(&mut table, &[1]);
    for row in &view.weekly_orders {
        table.add_row(vec![Cell::new(&row.week), Cell::new(row.orders)]);
    }
    println!("{table}");

    section("Orders per courier by week");
    let mut table = new_table(&["Week", "Orders per courier"]);
    align_right(&mut table, &[1]);
    for row in &view.weekly_courier_load {
        table.add_row(vec![
            Cell::new(&row.week),
            Cell::new(format!("{:.2}", row.orders_per_courier)),
        ]);
    }
    println!("{table}");

    section("Central delivery location by city and traffic condition");
    let mut table = new_table(&["City", "Traffic", "Latitude", "Longitude"]);
    align_right(&mut table, &[2, 3]);
    for row in &view.centroids {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(&row.traffic),
            Cell::new(format!("{:.6}", row.latitude)),
            Cell::new(format!("{:.6}", row.longitude)),
        ]);
    }
    println!("{table}");
}

pub fn print_couriers(view: &CourierView) {
    section("Overall metrics");
    metric(
        "Oldest courier",
        view.ages.as_ref().map(|ages| ages.oldest),
    );
    metric(
        "Youngest courier",
        view.ages.as_ref().map(|ages| ages.youngest),
    );
    metric(
        "Best vehicle condition",
        view.vehicle_conditions.as_ref().map(|v| v.best),
    );
    metric(
        "Worst vehicle condition",
        view.vehicle_conditions.as_ref().map(|v| v.worst),
    );

    section("Mean rating by courier");
    let mut table = new_table(&["Courier", "Mean rating"]);
    align_right(&mut table, &[1]);
    for row in &view.courier_ratings {
        table.add_row(vec![
            Cell::new(&row.courier_id),
            Cell::new(format!("{:.2}", row.mean_rating)),
        ]);
    }
    println!("{table}");

    section("Rating by traffic condition");
    let mut table = new_table(&["Traffic", "Mean", "Std dev"]);
    align_right(&mut table, &[1, 2]);
    for row in &view.traffic_ratings {
        table.add_row(vec![
            Cell::new(&row.traffic),
            Cell::new(format!("{:.2}", row.mean_rating)),
            Cell::new(format!("{:.2}", row.std_rating)),
        ]);
    }
    println!("{table}");

    section("Rating by weather condition");
    let mut table = new_table(&["Weather", "Mean", "Std dev"]);
    align_right(&mut table, &[1, 2]);
    for row in &view.weather_ratings {
        table.add_row(vec![
            Cell::new(&row.weather),
            Cell::new(format!("{:.2}", row.mean_rating)),
            Cell::new(format!("{:.2}", row.std_rating)),
        ]);
    }
    println!("{table}");

    section("Fastest couriers by city");
    print_leaderboard(&view.fastest_couriers);

    section("Slowest couriers by city");
    print_leaderboard(&view.slowest_couriers);
}

pub fn print_restaurants(view: &RestaurantView) {
    section("Overall metrics");
    metric("Unique couriers", Some(view.unique_couriers));
    metric("Mean delivery distance (km)", view.mean_distance_km);
    metric(
        "Mean delivery time, festival (min)",
        view.festival_times.festival_mean,
    );
    metric(
        "Std dev of delivery time, festival (min)",
        view.festival_times.festival_std,
    );
    metric(
        "Mean delivery time, no festival (min)",
        view.festival_times.regular_mean,
    );
    metric(
        "Std dev of delivery time, no festival (min)",
        view.festival_times.regular_std,
    );

    section("Delivery time by city");
    let mut table = new_table(&["City", "Mean (min)", "Std dev (min)"]);
    align_right(&mut table, &[1, 2]);
    for row in &view.city_times {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(format!("{:.2}", row.mean_time_min)),
            Cell::new(format!("{:.2}", row.std_time_min)),
        ]);
    }
    println!("{table}");

    section("Delivery time by city and order type");
    let mut table = new_table(&["City", "Order type", "Mean (min)", "Std dev (min)"]);
    align_right(&mut table, &[2, 3]);
    for row in &view.city_order_type_times {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(&row.order_type),
            Cell::new(format!("{:.2}", row.mean_time_min)),
            Cell::new(format!("{:.2}", row.std_time_min)),
        ]);
    }
    println!("{table}");

    section("Delivery time by city and traffic condition");
    let mut table = new_table(&["City", "Traffic", "Mean (min)", "Std dev (min)"]);
    align_right(&mut table, &[2, 3]);
    for row in &view.city_traffic_times {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(&row.traffic),
            Cell::new(format!("{:.2}", row.mean_time_min)),
            Cell::new(format!("{:.2}", row.std_time_min)),
        ]);
    }
    println!("{table}");

    section("Mean delivery distance by city");
    let mut table = new_table(&["City", "Mean distance (km)"]);
    align_right(&mut table, &[1]);
    for row in &view.city_distances {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(format!("{:.2}", row.mean_distance_km)),
        ]);
    }
    println!("{table}");
}

fn print_leaderboard(rows: &[deliv_analytics::CourierTime]) {
    let mut table = new_table(&["City", "Courier", "Mean time (min)"]);
    align_right(&mut table, &[2]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(&row.courier_id),
            Cell::new(format!("{:.2}", row.mean_time_min)),
        ]);
    }
    println!("{table}");
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn section(title: &str) {
    println!();
    println!("{title}");
}

/// Print one scalar metric line; absent metrics render as "-".
fn metric<T: Display>(label: &str, value: Option<T>) {
    match value {
        Some(value) => println!("{label}: {value}"),
        None => println!("{label}: -"),
    }
}
