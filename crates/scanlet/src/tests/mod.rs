mod arbitrary;
mod property_locality;
