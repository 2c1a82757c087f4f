//! Data models shared by server and client

pub mod employee;

pub use employee::{
    DEFAULT_DEPARTMENT, DEFAULT_TITLE, DEPARTMENT_OPTIONS, Employee, EmployeeCreate,
    EmployeeListQuery, EmployeeType, EmployeeUpdate, TITLE_OPTIONS, UnknownEmployeeType,
};
