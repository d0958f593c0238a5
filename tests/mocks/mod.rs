mod mock_contact_directory;

pub use mock_contact_directory::MockContactDirectory;
