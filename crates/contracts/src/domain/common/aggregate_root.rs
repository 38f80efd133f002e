/// Trait for the root of an aggregate
///
/// Defines identity accessors and the static naming metadata every aggregate
/// exposes to the UI (tab keys, page titles, card headings).
pub trait AggregateRoot {
    // ============================================================================
    // Instance methods (data of a concrete record)
    // ============================================================================

    /// Record identifier (e.g. "PO-2024-001")
    fn id(&self) -> &str;

    /// Headline shown on the record card (company name, title, part number)
    fn code(&self) -> &str;

    /// Secondary line shown under the headline
    fn description(&self) -> &str;

    // ============================================================================
    // Aggregate class metadata (static data)
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "vendor")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Vendor")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Vendors")
    fn list_name() -> &'static str;

    // ============================================================================
    // Methods with default implementation
    // ============================================================================

    /// Full aggregate name, doubles as the tab key (e.g. "a001_vendor")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
