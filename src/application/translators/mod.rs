pub mod ignore_policy;
pub mod inbound;
pub mod outbound;
