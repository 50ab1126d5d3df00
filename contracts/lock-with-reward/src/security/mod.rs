pub mod reentrancy_guard;
