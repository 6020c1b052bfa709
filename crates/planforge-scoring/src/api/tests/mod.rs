mod weight_overrides;
