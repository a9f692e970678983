/// UI layer: panels (filters, top bar), preview table, and charts.
pub mod charts;
pub mod panels;
pub mod table;
