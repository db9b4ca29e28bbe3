use crate::network::{Network, Route, StationId};

/// Trait for providing station adjacency and line membership to the searches
pub trait GraphProvider {
    fn station_count(&self) -> usize;
    fn lookup(&self, name: &str) -> Option<StationId>;
    fn station_name(&self, id: StationId) -> &str;
    fn routes_from(&self, id: StationId) -> &[Route];
    fn line_count(&self, id: StationId) -> usize;
}

impl GraphProvider for Network {
    fn station_count(&self) -> usize {
        Network::station_count(self)
    }

    fn lookup(&self, name: &str) -> Option<StationId> {
        Network::lookup(self, name)
    }

    fn station_name(&self, id: StationId) -> &str {
        self.station(id).name()
    }

    fn routes_from(&self, id: StationId) -> &[Route] {
        self.station(id).routes()
    }

    fn line_count(&self, id: StationId) -> usize {
        self.station(id).lines().len()
    }
}
