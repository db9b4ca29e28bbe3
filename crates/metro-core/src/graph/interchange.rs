//! Nearest-interchange search
//!
//! Finds a path from a station to the nearest other station served by more
//! than one line. Two frontier disciplines are available:
//!
//! - [`SearchStrategy::Dijkstra`] keeps the frontier in a binary heap keyed by
//!   known fare, so the first interchange popped is the cheapest one.
//! - [`SearchStrategy::LabelCorrecting`] keeps a FIFO queue and re-enqueues a
//!   station whenever a strictly cheaper fare to it is found. It stops at the
//!   first interchange dequeued, which is not necessarily the cheapest.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use tracing::{debug, trace};

use crate::config::SearchStrategy;
use crate::error::{MetroError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::GraphProvider;
use crate::network::{Fare, PathResult, StationId};

/// Best known fares and parent pointers for every station.
/// `None` fare means the station has not been reached.
struct Labels {
    source: StationId,
    fares: Vec<Option<Fare>>,
    parents: Vec<Option<StationId>>,
}

impl Labels {
    fn new(station_count: usize, source: StationId) -> Self {
        let mut fares = vec![None; station_count];
        fares[source.index()] = Some(Fare::ZERO);
        Self {
            source,
            fares,
            parents: vec![None; station_count],
        }
    }

    fn fare(&self, station: StationId) -> Option<Fare> {
        self.fares[station.index()]
    }

    /// Record `candidate` if the station is unreached or it is strictly cheaper
    fn relax(&mut self, station: StationId, via: StationId, candidate: Fare) -> bool {
        let improves = self
            .fare(station)
            .is_none_or(|known| candidate < known);
        if improves {
            self.fares[station.index()] = Some(candidate);
            self.parents[station.index()] = Some(via);
        }
        improves
    }

    fn is_goal(&self, provider: &dyn GraphProvider, station: StationId) -> bool {
        station != self.source && provider.line_count(station) > 1
    }

    fn path_to(&self, provider: &dyn GraphProvider, station: StationId) -> Option<PathResult> {
        let ids = reconstruct_path(self.source, station, &self.parents)?;
        Some(PathResult {
            stations: ids
                .iter()
                .map(|id| provider.station_name(*id).to_string())
                .collect(),
            fare: self.fare(station)?,
        })
    }
}

/// Find the path from `from` to its nearest interchange station.
///
/// The source itself never qualifies, even if it is an interchange.
#[tracing::instrument(skip(provider, strategy), fields(strategy = %strategy))]
pub fn nearest_interchange(
    provider: &dyn GraphProvider,
    from: &str,
    strategy: SearchStrategy,
) -> Result<PathResult> {
    let source = provider
        .lookup(from)
        .ok_or_else(|| MetroError::station_not_found(from))?;

    let found = match strategy {
        SearchStrategy::Dijkstra => search_dijkstra(provider, source),
        SearchStrategy::LabelCorrecting => search_label_correcting(provider, source),
    };

    found.ok_or_else(|| MetroError::NoInterchangeReachable {
        station: from.to_string(),
    })
}

fn search_dijkstra(provider: &dyn GraphProvider, source: StationId) -> Option<PathResult> {
    let mut labels = Labels::new(provider.station_count(), source);
    // (fare, discovery sequence, station): equal fares pop in discovery order
    let mut heap = BinaryHeap::new();
    let mut sequence = 0usize;
    let mut expanded = 0usize;
    heap.push(Reverse((Fare::ZERO, sequence, source)));

    while let Some(Reverse((fare, _, current))) = heap.pop() {
        if labels.fare(current).is_some_and(|known| fare > known) {
            continue;
        }

        if labels.is_goal(provider, current) {
            debug!(station = current.index(), fare = fare.value(), expanded, "interchange_found");
            return labels.path_to(provider, current);
        }

        expanded += 1;
        for route in provider.routes_from(current) {
            if labels.relax(route.to, current, fare + route.fare) {
                sequence += 1;
                trace!(station = route.to.index(), fare = (fare + route.fare).value(), "relax");
                heap.push(Reverse((fare + route.fare, sequence, route.to)));
            }
        }
    }

    debug!(expanded, "no_interchange");
    None
}

fn search_label_correcting(provider: &dyn GraphProvider, source: StationId) -> Option<PathResult> {
    let mut labels = Labels::new(provider.station_count(), source);
    let mut queue = VecDeque::from([source]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if labels.is_goal(provider, current) {
            debug!(station = current.index(), expanded, "interchange_found");
            return labels.path_to(provider, current);
        }

        let Some(fare) = labels.fare(current) else {
            continue;
        };

        expanded += 1;
        for route in provider.routes_from(current) {
            if labels.relax(route.to, current, fare + route.fare) {
                trace!(station = route.to.index(), fare = (fare + route.fare).value(), "relax");
                queue.push_back(route.to);
            }
        }
    }

    debug!(expanded, "no_interchange");
    None
}

#[cfg(test)]
mod tests;
