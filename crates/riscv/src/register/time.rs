//! time register

read_counter!(0xC01, 0xC81);
