//! ABL — the freight suite.
//!
//! One module per back-office entity. Each pins its resource wiring
//! (path, update keying, status verb) and wraps the generic
//! [`ResourceClient`](crate::ResourceClient) with typed operations.

pub mod booking_order;
pub mod branch;
pub mod charge;
pub mod consignment;
pub mod employee;
pub mod invoice;
pub mod payment;

pub use booking_order::{BookingOrder, BookingOrderDraft, BookingOrders};
pub use branch::{Branch, BranchDraft, Branches};
pub use charge::{Charge, ChargeDraft, Charges};
pub use consignment::{Consignment, ConsignmentDraft, Consignments};
pub use employee::{Employee, EmployeeDraft, Employees};
pub use invoice::{Invoice, InvoiceDraft, Invoices};
pub use payment::{Payment, PaymentDraft, Payments};
