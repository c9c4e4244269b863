use crate::domain::Incident;

/// Ordered, append-only collection of incidents for one dashboard session.
///
/// There is no process-wide instance: whoever drives the UI owns the store and lends it to the
/// list pipeline and the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        Self { incidents }
    }

    /// Append without validation; the entry form validates before calling this.
    pub fn append(&mut self, incident: Incident) {
        tracing::debug!(
            id = incident.id,
            severity = incident.severity.as_str(),
            "incident appended"
        );
        self.incidents.push(incident);
    }

    /// All incidents in insertion order.
    pub fn all(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Id for the next submitted record: current size + 1.
    ///
    /// Only unique because records are never deleted.
    pub fn next_id(&self) -> i64 {
        self.incidents.len() as i64 + 1
    }
}
