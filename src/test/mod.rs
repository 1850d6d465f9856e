


/// This module tests membership testing functions
mod membership;




/// This module tests the default parameters against the known answer.
mod kat;
