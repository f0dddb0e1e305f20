    pub {0} {{
        self.debug.install("{1}", self.{1}, callback)
    }}
