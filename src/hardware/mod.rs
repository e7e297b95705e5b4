pub mod beaglebone;
pub mod minnowboard;
pub mod raspberry_pi;
