pub mod flight;
pub mod ancillary;
pub mod seatmap;
pub mod search;
pub mod repository;

pub use flight::{Aircraft, Airline, CabinFares, Flight, FlightStatus};
pub use ancillary::{AddOn, AddOnCatalog, AddOnType, MealCatalog, MealOption};
pub use seatmap::{SeatMap, SeatMapGenerator, SeatSection};
pub use search::{search_flights, FlightQuery, SearchFilters, SortKey, SortOrder};
pub use repository::FlightRepository;
