//! Output formatting module

use expressway_app::app::{RouteReport, TollReport};
use expressway_domain::service::Weather;
use expressway_domain::model::{Corridor, DistanceEstimate, RouteSummary, TollResult, Waypoint};
use expressway_types::{OutputFormat, Result};
use serde::Serialize;

/// Minutes as "Xh Ym"
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Whole kilometres print without a decimal part
pub fn format_km(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{:.0} km", km)
    } else {
        format!("{:.1} km", km)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn print_toll_breakdown(toll: &TollResult) {
    println!("\n--- Toll Breakdown ({}) ---", toll.vehicle_class.label());
    if toll.passed_plazas.is_empty() {
        println!("No toll plazas on this stretch");
    }
    for (name, fare) in toll.breakdown() {
        println!("{:<20} ₹{:>6}", name, fare);
    }
    println!("-----------------------------");
    println!("{:<20} ₹{:>6}", "Total", toll.total_toll);
}

pub fn output_toll(output_format: OutputFormat, toll: &TollResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(toll);
    }

    println!("\nToll Calculation");
    println!("================");
    println!("Distance:        {}", format_km(toll.distance_km));
    println!("Toll:            ₹{}", toll.total_toll);
    println!("Travel time:     {}", format_duration(toll.estimated_minutes));
    print_toll_breakdown(toll);
    Ok(())
}

pub fn output_toll_report(output_format: OutputFormat, report: &TollReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    let toll = &report.toll;
    println!("\nToll Calculation");
    println!("================");
    println!("Distance:        {}", format_km(toll.distance_km));
    println!("Toll:            ₹{}", toll.total_toll);
    println!("Travel time:     {}", format_duration(report.total_minutes()));
    print_toll_breakdown(toll);

    println!("\n--- Travel Conditions ---");
    println!("Weather:         {}", describe_weather(&report.weather));
    println!("Traffic:         {}", report.traffic.level.label());
    println!("Delay:           {} minutes", report.traffic.delay_minutes);
    println!("Advice:          {}", report.traffic.recommendation);
    Ok(())
}

fn describe_weather(weather: &Weather) -> String {
    format!("{}, {}°C", weather.condition.label(), weather.temperature_c)
}

fn describe_waypoint(waypoint: Option<&Waypoint>) -> String {
    match waypoint {
        Some(w) => format!("{}, {}", w.name, w.region),
        None => "(unknown, km 0)".to_string(),
    }
}

pub fn output_route(output_format: OutputFormat, summary: &RouteSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    print_route(summary, None);
    Ok(())
}

pub fn output_route_report(output_format: OutputFormat, report: &RouteReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    print_route(&report.route, Some(&report.weather));
    Ok(())
}

fn print_route(summary: &RouteSummary, weather: Option<&Weather>) {
    println!("\nRoute Summary");
    println!("=============");
    println!("From:            {}", describe_waypoint(summary.origin.as_ref()));
    println!("To:              {}", describe_waypoint(summary.destination.as_ref()));
    println!("Distance:        {}", format_km(summary.toll.distance_km));
    println!("Travel time:     {}", format_duration(summary.toll.estimated_minutes));
    println!("Estimated toll:  ₹{}", summary.toll.total_toll);
    println!("Fuel cost:       ₹{}", summary.fuel_cost);
    println!("Date:            {}", summary.travel_date);
    println!("Departure:       {}", summary.travel_time);
    if let Some(weather) = weather {
        println!("Weather:         {}", describe_weather(weather));
    }

    println!("\n--- Recommended Stops ---");
    if summary.recommended_stops.is_empty() {
        println!("No service areas on this route");
    }
    for stop in &summary.recommended_stops {
        println!("{} ({})", stop.name, format_km(stop.km));
        println!("  Facilities: {}", stop.facility_labels());
    }

    if summary.amenities.len() > summary.recommended_stops.len() {
        println!(
            "\n{} more service area(s) on this route",
            summary.amenities.len() - summary.recommended_stops.len()
        );
    }
}

pub fn output_distance(output_format: OutputFormat, estimate: &DistanceEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(estimate);
    }

    println!("\nDistance Information");
    println!("====================");
    println!("From:            {}", estimate.origin_key);
    println!("To:              {}", estimate.destination_key);
    println!("Distance:        {}", format_km(estimate.distance_km));
    println!("Travel time:     {}", format_duration(estimate.estimated_minutes));
    println!("Fuel cost:       ₹{}", estimate.fuel_cost);
    Ok(())
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    text: &'a str,
    waypoint: Option<&'a Waypoint>,
}

pub fn output_match(output_format: OutputFormat, text: &str, waypoint: Option<&Waypoint>) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&MatchOutput { text, waypoint });
    }

    match waypoint {
        Some(w) => println!(
            "\"{}\" -> {} ({}, {}, {})",
            text.trim(),
            w.key,
            w.name,
            w.region,
            format_km(w.km)
        ),
        None => println!("\"{}\" -> no matching waypoint", text.trim()),
    }
    Ok(())
}

pub fn output_corridor(output_format: OutputFormat, corridor: &Corridor, source: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(corridor);
    }

    println!("\n{}", corridor.name());
    println!("{}", "=".repeat(corridor.name().chars().count()));
    println!("Source: {}", source);

    println!("\n--- Waypoints ({}) ---", corridor.waypoints().len());
    for w in corridor.waypoints() {
        println!("{:>8}  {:<12} {:<16} {}", format_km(w.km), w.key, w.name, w.region);
    }

    println!("\n--- Toll Plazas ({}) ---", corridor.toll_plazas().len());
    println!("{:>8}  {:<12} {:>7} {:>10} {:>7}", "km", "Name", "Light", "Commercial", "Heavy");
    for p in corridor.toll_plazas() {
        let rate = |r: Option<u32>| r.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "{:>8}  {:<12} {:>7} {:>10} {:>7}",
            format_km(p.km),
            p.name,
            rate(p.rates.light),
            rate(p.rates.commercial),
            rate(p.rates.heavy)
        );
    }

    println!("\n--- Amenities ({}) ---", corridor.amenities().len());
    for a in corridor.amenities() {
        println!("{:>8}  {}", format_km(a.km), a.name);
        println!("          {}", a.facility_labels());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(246), "4h 6m");
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(810), "13h 30m");
    }

    #[test]
    fn test_describe_weather() {
        use expressway_domain::service::WeatherCondition;
        let weather = Weather {
            condition: WeatherCondition::LightRain,
            temperature_c: 30,
            visibility: "Good".to_string(),
            recommendation: "Safe to travel".to_string(),
        };
        assert_eq!(describe_weather(&weather), "Light Rain, 30°C");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(410.0), "410 km");
        assert_eq!(format_km(120.5), "120.5 km");
    }
}
