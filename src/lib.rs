pub mod matrix {
    pub mod column;
    pub mod element;
    pub mod matrix;
    pub mod reduce;
    pub mod row;
}
pub mod rings {
    pub mod rational;
}
