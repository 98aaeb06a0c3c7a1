/*! Maps a [General Transit Feed Specification](https://gtfs.org/) (GTFS) feed to an RDF graph.

The graph uses the [GTFS vocabulary](http://vocab.gtfs.org/terms#) together with FOAF, Dublin Core terms,
schema.org and WGS84 geo, and is written as Turtle (or N3), N-Triples or RDF/XML.

To get started, see [GtfsToRdf].

## How a feed is mapped

Each CSV file is read into [serde](https://serde.rs) structures ([Agency], [Stop], [Route]…), then every row
is mapped to statements about a node of the graph.

### Identity

Entities with a natural key get a URI built from the base URI, their kind and the key: `stop_id=42` with
the base `http://x/` is always `http://x/stop_42`. The first time an entity is met, in whichever file, it gets its
`rdf:type` and a `dct:identifier`. Later references reuse the node, so a trip can point to a route that
routes.txt will only describe later. References to entities that no file describes are not reported, they
just make nodes with no other statement.

Stop times and fare rules have no natural key, they are numbered in the order they are read
(see [AnonymousIdentity]). Agencies are identified by id or by URL (see [AgencyIdentity]).

### Optional columns

Optional values are [std::option], `None` both when the column is absent and when the value is empty.
No statement is made for them. Missing mandatory columns make the whole conversion fail.

### Enumerations

Coded values (wheelchair accessibility, pickup type, payment method…) are Rust enums deserialized with
a default for every unknown code, so they never fail. The route type is the exception: an unknown mode is
an error.
*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate serde_derive;

mod config;
mod converter;
mod date;
mod enums;
pub mod error;
mod graph;
mod gtfs_reader;
mod identifiers;
mod mapping;
pub(crate) mod objects;
pub mod serializer;
pub mod vocab;

#[cfg(test)]
mod tests;

pub use config::{AgencyIdentity, AnonymousIdentity, Config};
pub use converter::GtfsToRdf;
pub use date::{date_literal, parse_date};
pub use enums::{boolean, route_type, ROUTE_TYPES};
pub use error::{Error, FieldError};
pub use graph::{Graph, Iri, Literal, Term, Triple};
pub use gtfs_reader::{Feed, GtfsReader, GTFS_FILES};
pub use identifiers::{entity_uri, EntityKind, MappingContext};
pub use mapping::ToRdf;
pub use objects::*;
pub use serializer::{serialize, RdfFormat};
