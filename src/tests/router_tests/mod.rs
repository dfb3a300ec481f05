mod navigation_tests;
mod projects_tests;
mod properties_tests;
