pub mod payment_events;
