use hadath_core_contact_impl::{validate::ContactValidateServiceImpl, ContactFeatureServiceImpl};
use hadath_core_preferences_impl::PreferencesFeatureServiceImpl;
use hadath_extern_impl::contact_messages::ContactMessagesApiServiceImpl;
use hadath_persistence_file::FilePreferenceRepository;
use hadath_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = hadath_api_rest::RestServer<ContactFeature>;

// Persistence
pub type PreferenceRepo = FilePreferenceRepository;

// Extern
pub type ContactMessagesApi = ContactMessagesApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ContactValidate, ContactMessagesApi>;
pub type ContactValidate = ContactValidateServiceImpl<Time>;

pub type PreferencesFeature = PreferencesFeatureServiceImpl<PreferenceRepo>;
