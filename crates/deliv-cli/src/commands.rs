use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, info_span};

use deliv_cli::views::{build_company_view, build_courier_view, build_restaurant_view};
use deliv_ingest::load_orders;
use deliv_model::DeliveryRecord;
use deliv_transform::{ORDER_DATE_FORMAT, OrderFilters, apply_filters, normalize};

use crate::cli::{ReportFormatArg, ViewArgs};
use crate::summary;

pub fn run_company(args: &ViewArgs) -> Result<()> {
    let records = load_filtered(args, "company")?;
    let view = build_company_view(&records);
    match args.format {
        ReportFormatArg::Table => summary::print_company(&view),
        ReportFormatArg::Json => print_json(&view)?,
    }
    Ok(())
}

pub fn run_couriers(args: &ViewArgs) -> Result<()> {
    let records = load_filtered(args, "couriers")?;
    let view = build_courier_view(&records);
    match args.format {
        ReportFormatArg::Table => summary::print_couriers(&view),
        ReportFormatArg::Json => print_json(&view)?,
    }
    Ok(())
}

pub fn run_restaurants(args: &ViewArgs) -> Result<()> {
    let records = load_filtered(args, "restaurants")?;
    let view = build_restaurant_view(&records);
    match args.format {
        ReportFormatArg::Table => summary::print_restaurants(&view),
        ReportFormatArg::Json => print_json(&view)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(view: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(view).context("serialize view")?;
    println!("{rendered}");
    Ok(())
}

fn build_filters(args: &ViewArgs) -> Result<OrderFilters> {
    let before = NaiveDate::parse_from_str(&args.until, ORDER_DATE_FORMAT).with_context(|| {
        format!(
            "invalid --until date {:?} (expected dd-mm-yyyy)",
            args.until
        )
    })?;
    Ok(OrderFilters::new(before, args.traffic.iter().cloned()))
}

/// Load, normalize and filter the dataset for one view invocation.
fn load_filtered(args: &ViewArgs, view: &'static str) -> Result<Vec<DeliveryRecord>> {
    let span = info_span!("view", view, dataset = %args.dataset.display());
    let _guard = span.enter();
    let filters = build_filters(args)?;

    let load_start = Instant::now();
    let table = load_orders(&args.dataset)?;
    info!(
        rows = table.row_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "dataset loaded"
    );

    let records = normalize(&table).context("normalize dataset")?;
    info!(
        records = records.len(),
        dropped = table.row_count() - records.len(),
        "dataset cleaned"
    );

    let selected = apply_filters(&records, &filters);
    info!(
        records = selected.len(),
        until = %filters.before,
        "sidebar filters applied"
    );
    Ok(selected)
}
