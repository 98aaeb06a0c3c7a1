//! Row to statements mapping, one [ToRdf] implementation per GTFS file
//!
//! Optional columns only produce a statement when the column is in the file and the
//! value is not empty. Statements that can only have one value on a node (types, flags,
//! coordinates of a shape point) are *set*, the others are *added*.
use crate::date::date_literal;
use crate::enums;
use crate::error::FieldError;
use crate::graph::{Iri, Literal};
use crate::identifiers::{encode, EntityKind, MappingContext};
use crate::objects::*;
use crate::vocab::{dct, foaf, geo, gtfs, rdf, schema, xsd};
use crate::Error;

/// A GTFS file whose rows can be mapped to statements
pub trait ToRdf: GtfsFile + Sized {
    /// Adds the statements of every row to the graph of the context, in row order
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error>;
}

/// Attaches the file and the row (1 based, header excluded) to a value error
fn at_row<O: GtfsFile>(index: usize) -> impl FnOnce(FieldError) -> Error {
    move |source| Error::InvalidField {
        file_name: O::FILE_NAME.to_owned(),
        row: index + 1,
        source,
    }
}

fn string(value: &str) -> Literal {
    Literal::string(value)
}

fn non_negative_integer(value: &str) -> Literal {
    Literal::typed(value, xsd::NON_NEGATIVE_INTEGER)
}

impl ToRdf for Agency {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for agency in rows {
            let node = ctx.resolve_agency(agency);
            let graph = &mut ctx.graph;
            graph.add(&node, foaf::NAME, string(&agency.name));
            graph.add(&node, gtfs::TIME_ZONE, string(&agency.timezone));
            if let Some(lang) = &agency.lang {
                graph.add(&node, dct::LANGUAGE, string(lang));
            }
            if let Some(phone) = &agency.phone {
                graph.add(&node, foaf::PHONE, string(phone));
            }
            if let Some(fare_url) = &agency.fare_url {
                graph.add(&node, gtfs::FARE_URL, Iri::new(fare_url.as_str()));
            }
        }
        Ok(())
    }
}

impl ToRdf for Stop {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for stop in rows {
            let node = ctx.resolve(EntityKind::Stop, &stop.id);
            let zone = stop
                .zone_id
                .as_deref()
                .map(|zone_id| ctx.resolve(EntityKind::Zone, zone_id));
            let parent = stop
                .parent_station
                .as_deref()
                .map(|parent| ctx.resolve(EntityKind::Stop, parent));

            let graph = &mut ctx.graph;
            let class = match stop.location_type.as_deref() {
                Some("1") => gtfs::STATION,
                _ => gtfs::STOP,
            };
            graph.set(&node, rdf::TYPE, Iri::new(class));
            graph.add(&node, foaf::NAME, string(&stop.name));
            graph.add(&node, geo::LONG, string(&stop.longitude));
            graph.add(&node, geo::LAT, string(&stop.latitude));
            if let Some(code) = &stop.code {
                graph.add(&node, gtfs::CODE, string(code));
            }
            if let Some(description) = &stop.description {
                graph.add(&node, dct::DESCRIPTION, string(description));
            }
            if let Some(zone) = zone {
                graph.add(&node, gtfs::ZONE_PROPERTY, zone);
            }
            if let Some(url) = &stop.url {
                graph.add(&node, foaf::PAGE, string(url));
            }
            if let Some(parent) = parent {
                graph.add(&node, gtfs::PARENT_STATION, parent);
            }
            if let Some(timezone) = &stop.timezone {
                graph.add(&node, gtfs::TIME_ZONE, string(timezone));
            }
            if let Some(wheelchair) = stop.wheelchair_boarding {
                graph.add(
                    &node,
                    gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY,
                    Iri::new(wheelchair.iri()),
                );
            }
        }
        Ok(())
    }
}

impl ToRdf for Route {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for (i, route) in rows.iter().enumerate() {
            let route_type = enums::route_type(&route.route_type).map_err(at_row::<Self>(i))?;
            let node = ctx.resolve(EntityKind::Route, &route.id);
            let agency = route
                .agency_id
                .as_deref()
                .map(|agency_id| ctx.agency_reference(agency_id));

            let graph = &mut ctx.graph;
            graph.add(&node, gtfs::SHORT_NAME, string(&route.short_name));
            graph.add(&node, gtfs::LONG_NAME, string(&route.long_name));
            graph.set(&node, gtfs::ROUTE_TYPE, route_type);
            if let Some(agency) = agency {
                graph.add(&node, gtfs::AGENCY_PROPERTY, agency);
            }
            if let Some(desc) = &route.desc {
                graph.add(&node, dct::DESCRIPTION, string(desc));
            }
            if let Some(url) = &route.url {
                graph.add(&node, foaf::PAGE, string(url));
            }
            if let Some(color) = &route.color {
                graph.add(&node, gtfs::COLOR, string(color));
            }
            if let Some(text_color) = &route.text_color {
                graph.add(&node, gtfs::TEXT_COLOR, string(text_color));
            }
        }
        Ok(())
    }
}

impl ToRdf for Trip {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for trip in rows {
            let node = ctx.resolve(EntityKind::Trip, &trip.id);
            let route = ctx.resolve(EntityKind::Route, &trip.route_id);
            let service = ctx.resolve(EntityKind::Service, &trip.service_id);
            let shape = trip
                .shape_id
                .as_deref()
                .map(|shape_id| ctx.resolve(EntityKind::Shape, shape_id));

            let graph = &mut ctx.graph;
            graph.add(&node, gtfs::ROUTE_PROPERTY, route);
            graph.add(&node, gtfs::SERVICE_PROPERTY, service);
            if let Some(headsign) = &trip.trip_headsign {
                graph.add(&node, gtfs::HEADSIGN, string(headsign));
            }
            if let Some(short_name) = &trip.trip_short_name {
                graph.add(&node, gtfs::SHORT_NAME, string(short_name));
            }
            if let Some(direction) = &trip.direction_id {
                graph.set(&node, gtfs::DIRECTION, enums::boolean(direction));
            }
            if let Some(block) = &trip.block_id {
                graph.add(&node, gtfs::BLOCK, non_negative_integer(block));
            }
            if let Some(shape) = shape {
                graph.add(&node, gtfs::SHAPE_PROPERTY, shape);
            }
            if let Some(wheelchair) = trip.wheelchair_accessible {
                graph.add(
                    &node,
                    gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY,
                    Iri::new(wheelchair.iri()),
                );
            }
            if let Some(bikes) = trip.bikes_allowed {
                graph.set(&node, gtfs::BIKES_ALLOWED, bikes.literal());
            }
        }
        Ok(())
    }
}

impl ToRdf for StopTime {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for stop_time in rows {
            let node = ctx.stop_time_node(stop_time);
            let trip = ctx.resolve(EntityKind::Trip, &stop_time.trip_id);
            let stop = ctx.resolve(EntityKind::Stop, &stop_time.stop_id);

            let graph = &mut ctx.graph;
            graph.set(&node, rdf::TYPE, Iri::new(gtfs::STOP_TIME));
            graph.add(&node, gtfs::TRIP_PROPERTY, trip);
            graph.add(&node, gtfs::ARRIVAL_TIME, string(&stop_time.arrival_time));
            graph.add(&node, gtfs::DEPARTURE_TIME, string(&stop_time.departure_time));
            graph.add(&node, gtfs::STOP_PROPERTY, stop);
            graph.add(
                &node,
                gtfs::STOP_SEQUENCE,
                non_negative_integer(&stop_time.stop_sequence),
            );
            if let Some(headsign) = &stop_time.stop_headsign {
                graph.add(&node, gtfs::HEADSIGN, string(headsign));
            }
            if let Some(pickup_type) = stop_time.pickup_type {
                graph.add(&node, gtfs::PICKUP_TYPE, Iri::new(pickup_type.iri()));
            }
            if let Some(drop_off_type) = stop_time.drop_off_type {
                graph.add(&node, gtfs::DROP_OFF_TYPE, Iri::new(drop_off_type.iri()));
            }
            if let Some(distance) = &stop_time.shape_dist_traveled {
                graph.add(
                    &node,
                    gtfs::DISTANCE_TRAVELED,
                    Literal::typed(distance.as_str(), xsd::DOUBLE),
                );
            }
        }
        Ok(())
    }
}

impl ToRdf for Calendar {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for (i, calendar) in rows.iter().enumerate() {
            let start_date = date_literal(&calendar.start_date).map_err(at_row::<Self>(i))?;
            let end_date = date_literal(&calendar.end_date).map_err(at_row::<Self>(i))?;
            let service = ctx.resolve(EntityKind::Service, &calendar.service_id);
            let rule = ctx.uri(&format!("calendar_{}", calendar.service_id.trim()));
            let temporal = Iri::new(format!("{}_temporal", rule.as_str()));

            let graph = &mut ctx.graph;
            graph.add(&service, gtfs::SERVICE_RULE, rule.clone());
            graph.set(&rule, rdf::TYPE, Iri::new(gtfs::CALENDAR_RULE));
            for (day, value) in [
                (gtfs::MONDAY, &calendar.monday),
                (gtfs::TUESDAY, &calendar.tuesday),
                (gtfs::WEDNESDAY, &calendar.wednesday),
                (gtfs::THURSDAY, &calendar.thursday),
                (gtfs::FRIDAY, &calendar.friday),
                (gtfs::SATURDAY, &calendar.saturday),
                (gtfs::SUNDAY, &calendar.sunday),
            ] {
                graph.set(&rule, day, enums::boolean(value));
            }
            graph.set(&rule, dct::TEMPORAL, temporal.clone());
            graph.set(&temporal, rdf::TYPE, Iri::new(dct::PERIOD_OF_TIME));
            graph.set(&temporal, schema::START_DATE, start_date);
            graph.set(&temporal, schema::END_DATE, end_date);
        }
        Ok(())
    }
}

impl ToRdf for CalendarDate {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for (i, calendar_date) in rows.iter().enumerate() {
            let date = date_literal(&calendar_date.date).map_err(at_row::<Self>(i))?;
            let service = ctx.resolve(EntityKind::Service, &calendar_date.service_id);
            let rule = ctx.uri(&format!(
                "calendar_date_{}_{}",
                calendar_date.service_id.trim(),
                calendar_date.date.trim()
            ));

            let graph = &mut ctx.graph;
            graph.add(&service, gtfs::SERVICE_RULE, rule.clone());
            graph.set(&rule, rdf::TYPE, Iri::new(gtfs::CALENDAR_DATE_RULE));
            graph.set(&rule, dct::DATE, date);
            graph.set(
                &rule,
                gtfs::DATE_ADDITION,
                calendar_date.exception_type.literal(),
            );
        }
        Ok(())
    }
}

impl ToRdf for FareAttribute {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for fare in rows {
            let node = ctx.resolve(EntityKind::Fare, &fare.id);

            let graph = &mut ctx.graph;
            graph.add(
                &node,
                gtfs::PRICE,
                Literal::typed(fare.price.as_str(), xsd::DECIMAL),
            );
            graph.add(&node, schema::PRICE_CURRENCY, string(&fare.currency));
            graph.set(
                &node,
                gtfs::PAYMENT_METHOD,
                Iri::new(fare.payment_method.iri()),
            );
            graph.set(&node, gtfs::TRANSFERS, Iri::new(fare.transfers.iri()));
            if let Some(duration) = &fare.transfer_duration {
                graph.add(
                    &node,
                    gtfs::TRANSFER_EXPIRY_TIME,
                    non_negative_integer(duration),
                );
            }
        }
        Ok(())
    }
}

impl ToRdf for FareRule {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for fare_rule in rows {
            let node = ctx.fare_rule_node(fare_rule);
            let fare = ctx.resolve(EntityKind::Fare, &fare_rule.fare_id);
            let mut references = vec![(gtfs::FARE_CLASS_PROPERTY, fare)];
            if let Some(route_id) = &fare_rule.route_id {
                references.push((gtfs::ROUTE_PROPERTY, ctx.resolve(EntityKind::Route, route_id)));
            }
            if let Some(origin_id) = &fare_rule.origin_id {
                references.push((gtfs::ORIGIN_ZONE, ctx.resolve(EntityKind::Zone, origin_id)));
            }
            if let Some(destination_id) = &fare_rule.destination_id {
                references.push((
                    gtfs::DESTINATION_ZONE,
                    ctx.resolve(EntityKind::Zone, destination_id),
                ));
            }
            if let Some(contains_id) = &fare_rule.contains_id {
                references.push((gtfs::ZONE_PROPERTY, ctx.resolve(EntityKind::Zone, contains_id)));
            }

            ctx.graph.set(&node, rdf::TYPE, Iri::new(gtfs::FARE_RULE));
            for (predicate, object) in references {
                ctx.graph.add(&node, predicate, object);
            }
        }
        Ok(())
    }
}

impl ToRdf for Shape {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for point in rows {
            let shape = ctx.resolve(EntityKind::Shape, &point.id);
            let node = Iri::new(format!("{}_{}", shape.as_str(), encode(point.sequence.trim())));

            let graph = &mut ctx.graph;
            graph.add(&shape, gtfs::SHAPE_POINT_PROPERTY, node.clone());
            graph.set(&node, rdf::TYPE, Iri::new(gtfs::SHAPE_POINT));
            graph.set(&node, geo::LONG, string(&point.longitude));
            graph.set(&node, geo::LAT, string(&point.latitude));
            graph.set(
                &node,
                gtfs::POINT_SEQUENCE,
                non_negative_integer(&point.sequence),
            );
            if let Some(distance) = &point.dist_traveled {
                graph.set(&node, gtfs::DISTANCE_TRAVELED, non_negative_integer(distance));
            }
        }
        Ok(())
    }
}

impl ToRdf for Frequency {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for frequency in rows {
            let node = ctx.uri(&format!(
                "frequency_{}_{}_{}",
                frequency.trip_id.trim(),
                frequency.start_time.trim(),
                frequency.end_time.trim()
            ));
            let trip = ctx.resolve(EntityKind::Trip, &frequency.trip_id);

            let graph = &mut ctx.graph;
            graph.set(&node, rdf::TYPE, Iri::new(gtfs::FREQUENCY));
            graph.add(&node, gtfs::TRIP_PROPERTY, trip);
            graph.set(&node, gtfs::START_TIME, string(&frequency.start_time));
            graph.set(&node, gtfs::END_TIME, string(&frequency.end_time));
            graph.set(
                &node,
                gtfs::HEADWAY_SECONDS,
                non_negative_integer(&frequency.headway_secs),
            );
            if let Some(exact_times) = &frequency.exact_times {
                graph.set(&node, gtfs::EXACT_TIMES, enums::boolean(exact_times));
            }
        }
        Ok(())
    }
}

impl ToRdf for Transfer {
    fn to_rdf(ctx: &mut MappingContext, rows: &[Self]) -> Result<(), Error> {
        for transfer in rows {
            let node = ctx.uri(&format!(
                "transfer_{}_{}",
                transfer.from_stop_id.trim(),
                transfer.to_stop_id.trim()
            ));
            let origin = ctx.resolve(EntityKind::Stop, &transfer.from_stop_id);
            let destination = ctx.resolve(EntityKind::Stop, &transfer.to_stop_id);

            let graph = &mut ctx.graph;
            graph.set(&node, rdf::TYPE, Iri::new(gtfs::TRANSFER_RULE));
            graph.add(&node, gtfs::ORIGIN_STOP, origin);
            graph.add(&node, gtfs::DESTINATION_STOP, destination);
            graph.set(
                &node,
                gtfs::TRANSFER_TYPE,
                Iri::new(transfer.transfer_type.iri()),
            );
            if let Some(min_transfer_time) = &transfer.min_transfer_time {
                graph.set(
                    &node,
                    gtfs::MINIMUM_TRANSFER_TIME,
                    non_negative_integer(min_transfer_time),
                );
            }
        }
        Ok(())
    }
}
